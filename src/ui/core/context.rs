use crate::classifier::Classifier;
use crate::config::Config;
use crate::logger::Logger;
use std::sync::Arc;

/// Services and settings shared by every tab
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
    pub classifier: Arc<dyn Classifier>,
}

impl AppContext {
    pub fn new(config: Config, logger: Logger, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            config,
            logger,
            classifier,
        }
    }
}
