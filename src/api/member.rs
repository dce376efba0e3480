//! Member Endpoints

use crate::error::ApiResult;
use crate::models::{Board, Member, Organization};

use super::{ApiClient, NO_PARAMS};

impl ApiClient {
    /// The member owning the token
    pub async fn get_me(&self) -> ApiResult<Member> {
        self.get("members/me", &[("fields", "username,fullName,initials")]).await
    }

    pub async fn list_my_organizations(&self) -> ApiResult<Vec<Organization>> {
        self.get("members/me/organizations", NO_PARAMS).await
    }

    /// Every open board the member can see, personal ones included
    pub async fn list_my_boards(&self) -> ApiResult<Vec<Board>> {
        self.get("members/me/boards", &[("filter", "open")]).await
    }
}
