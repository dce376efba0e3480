//! Organization Endpoints

use serde::Serialize;

use crate::error::ApiResult;
use crate::models::{Board, Organization};

use super::ApiClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrganizationArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    desc: Option<&'a str>,
}

impl ApiClient {
    pub async fn create_organization(&self, display_name: &str, desc: &str) -> ApiResult<Organization> {
        let args = OrganizationArgs { display_name: Some(display_name), desc: Some(desc) };
        self.post("organizations", &args).await
    }

    pub async fn update_organization(
        &self,
        id: &str,
        display_name: Option<&str>,
        desc: Option<&str>,
    ) -> ApiResult<Organization> {
        let args = OrganizationArgs { display_name, desc };
        self.put(&format!("organizations/{}", id), &args).await
    }

    pub async fn delete_organization(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("organizations/{}", id)).await
    }

    pub async fn list_organization_boards(&self, id: &str) -> ApiResult<Vec<Board>> {
        self.get(&format!("organizations/{}/boards", id), &[("filter", "open")]).await
    }
}
