use std::sync::Arc;

use crate::domain::contact::ContactRepository;

pub struct ContactQueryService {
    pub(super) repo: Arc<dyn ContactRepository>,
}

impl ContactQueryService {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }
}
