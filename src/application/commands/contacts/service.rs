use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::contact::ContactRepository};

pub struct ContactCommandService {
    pub(super) repo: Arc<dyn ContactRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ContactCommandService {
    pub fn new(repo: Arc<dyn ContactRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
