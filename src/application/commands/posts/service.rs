use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::{
        content::{Slug, ensure_slug_available},
        post::{PostId, PostReadRepository, PostWriteRepository},
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slugger,
            clock,
        }
    }

    pub(super) async fn ensure_slug_free(
        &self,
        slug: &Slug,
        editing: Option<PostId>,
    ) -> crate::application::ApplicationResult<()> {
        let owner = self.read_repo.find_by_slug(slug).await?.map(|post| post.id);
        ensure_slug_available(slug, owner, editing)?;
        Ok(())
    }
}
