use crate::ingest::{Classification, LineParser, RequestLine, parse_line};
use http::Method;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

const STATIC_LINE: &str =
    "[1718000000000][GET] request handled at 12,345ms from 10.0.0.1 http://shop/img/logo.png";
const DYNAMIC_LINE: &str =
    "[1718000001500][POST] request handled at 250.5ms from 10.0.0.2 http://shop/cart?id=7";

#[test]
fn parses_line_with_decimal_comma() {
    // Act
    let line = parse_line(STATIC_LINE);

    // Assert
    assert_eq!(
        line,
        Some(RequestLine {
            timestamp: 1_718_000_000_000,
            method: Method::GET,
            elapsed: "12.345".parse().unwrap(),
            uri: "http://shop/img/logo.png".to_string(),
        })
    );
}

#[test]
fn parses_line_with_decimal_point() {
    // Act
    let line = parse_line(DYNAMIC_LINE).unwrap();

    // Assert
    assert_eq!(line.method, Method::POST);
    assert_eq!(line.elapsed, "250.5".parse::<Decimal>().unwrap());
    assert_eq!(line.uri, "http://shop/cart?id=7");
}

#[test]
fn rejects_non_request_lines() {
    for line in [
        "",
        "2024-06-10 INFO server started",
        // unknown method
        "[1718000000000][TRACE] request handled at 1.0ms http://shop/",
        // elapsed without fraction
        "[1718000000000][GET] request handled at 12ms http://shop/",
        // no uri
        "[1718000000000][GET] request handled at 1.5ms",
        // https is not matched
        "[1718000000000][GET] request handled at 1.5ms https://shop/",
        // trailing text after the uri
        "[1718000000000][GET] request handled at 1.5ms http://shop/ done",
    ] {
        assert_eq!(parse_line(line), None, "{line:?}");
    }
}

#[test]
fn parser_classifies_and_numbers_records() {
    // Arrange
    let parser = LineParser::default();

    // Act
    let first = parser.parse(STATIC_LINE, 1).unwrap();
    let second = parser.parse(DYNAMIC_LINE, 2).unwrap();

    // Assert
    assert_eq!(first.ordinal, 1);
    assert_eq!(first.classification, Classification::Static);
    assert_eq!(first.timestamp, 1_718_000_000_000);
    assert_eq!(second.ordinal, 2);
    assert_eq!(second.classification, Classification::Dynamic);
    assert_eq!(second.method, Method::POST);
}
