use crate::conf::types::ReqstatConfig;
use crate::ingest::{LineParser, StaticClassifier};
use crate::stats::{CollectPlan, WindowPlan};
use std::num::NonZeroU64;

/// Lowers a validated config into what a run needs.
pub fn lower_config(config: &ReqstatConfig) -> (CollectPlan, LineParser) {
    let window = config
        .window
        .step
        .and_then(NonZeroU64::new)
        .map(|step| WindowPlan {
            step,
            limit: config.window.limit,
        });

    let plan = CollectPlan {
        collect_static: config.collect.static_requests,
        collect_dynamic: config.collect.dynamic_requests,
        collect_methods: config.collect.methods,
        window,
    };

    let classifier = StaticClassifier::new(config.classifier.static_markers.iter().cloned());

    (plan, LineParser::new(classifier))
}
