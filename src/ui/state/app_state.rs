use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::view::page::UsersPage;
use crate::infra::http::media::HttpMediaUploader;
use crate::infra::http::users::HttpUserGateway;
use crate::usecase::services::list_engine::PageHandle;
use crate::usecase::services::upload_service::UploadService;
use crate::usecase::services::user_service::UserService;

/// Services shared through the component tree as context.
#[derive(Clone)]
pub struct Services {
    pub config: Arc<AppConfig>,
    pub users: Arc<UserService>,
    pub uploads: Arc<UploadService>,
}

impl Services {
    pub fn from_config(config: AppConfig) -> Self {
        let gateway = Arc::new(HttpUserGateway::new(config.api_base_url.clone()));
        let uploader = Arc::new(HttpMediaUploader::new(config.upload_url.clone()));
        Self {
            users: Arc::new(UserService::new(gateway)),
            uploads: Arc::new(UploadService::new(uploader)),
            config: Arc::new(config),
        }
    }
}

impl PageHandle for Signal<UsersPage> {
    fn with_page<R>(&mut self, f: impl FnOnce(&mut UsersPage) -> R) -> R {
        f(&mut *self.write())
    }
}
