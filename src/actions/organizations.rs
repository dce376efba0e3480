//! Organization Actions

use crate::api::ApiClient;
use crate::models::Organization;
use crate::store::{store_update_cache, AppStore, ErrorSlot};

use super::{clear_error, load_boards, report};

pub async fn load_organizations(store: AppStore, client: &ApiClient) {
    match client.list_my_organizations().await {
        Ok(orgs) => {
            log::debug!("[STORE] loaded {} organizations", orgs.len());
            store_update_cache(&store, |cache| cache.replace_organizations(orgs));
            clear_error(&store, ErrorSlot::Organizations);
        }
        Err(e) => report(&store, ErrorSlot::Organizations, "load organizations", &e),
    }
}

pub async fn create_organization(store: AppStore, client: &ApiClient, display_name: &str) -> Option<String> {
    match client.create_organization(display_name, "").await {
        Ok(org) => {
            let id = org.id.clone();
            store_update_cache(&store, |cache| cache.upsert_organization(org));
            clear_error(&store, ErrorSlot::Organizations);
            Some(id)
        }
        Err(e) => {
            report(&store, ErrorSlot::Organizations, "create the organization", &e);
            None
        }
    }
}

pub async fn rename_organization(store: AppStore, client: &ApiClient, id: &str, display_name: &str) {
    let edit = |o: &mut Organization| std::mem::replace(&mut o.display_name, display_name.to_string());
    let Some(old) = store_update_cache(&store, |cache| cache.edit_organization(id, edit)) else { return };

    match client.update_organization(id, Some(display_name), None).await {
        Ok(org) => {
            store_update_cache(&store, |cache| cache.upsert_organization(org));
            clear_error(&store, ErrorSlot::Organizations);
        }
        Err(e) => {
            store_update_cache(&store, |cache| cache.edit_organization(id, |o| o.display_name = old));
            report(&store, ErrorSlot::Organizations, "rename the organization", &e);
        }
    }
}

pub async fn delete_organization(store: AppStore, client: &ApiClient, id: &str) {
    store_update_cache(&store, |cache| cache.remove_organization(id));

    if let Err(e) = client.delete_organization(id).await {
        report(&store, ErrorSlot::Organizations, "delete the organization", &e);
        load_organizations(store, client).await;
        load_boards(store, client).await;
    }
}
