//! Latest release information.

use sysconsole_core::system::VersionInfo;

use crate::client::ConsoleClient;
use crate::error::ApiResult;
use crate::request::ApiRequest;
use crate::transport::Transport;

const LATEST_VERSION: &str = "/sysApi/sys/info/latestVersion";

pub fn get_version() -> ApiRequest<VersionInfo> {
    ApiRequest::get(LATEST_VERSION)
}

impl<T: Transport> ConsoleClient<T> {
    pub async fn get_version(&self) -> ApiResult<VersionInfo> {
        self.execute(get_version()).await
    }
}
