mod error;
mod loader;
mod lower;
pub mod types;
mod validate;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config, resolve_config};
pub use lower::lower_config;
pub use types::ReqstatConfig;
pub use validate::validate_config;

/// Written by `reqstat config init`.
pub const CONFIG_TEMPLATE: &str = r#"# reqstat configuration

[collect]
# Collect statistics for static assets and dynamic pages next to ALL.
static = false
dynamic = false
# Break requests down by HTTP method.
methods = false

[window]
# Cumulative window width in requests. Remove to disable windowed statistics.
# step = 1000
# Stop after this many requests.
# limit = 100000

[classifier]
# A request is static when its URI contains any of these.
static_markers = ["/img/", "/cmsstatic/", "/js/"]

[report]
console = true
json = false
output_dir = "."
"#;
