//! Profile list and map commands

use profilemap_core::{MapScene, ProfileListView};
use profilemap_domain::Result as DomainResult;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Fetch every profile into the store.
///
/// Returns the number of profiles loaded. On failure the previous profiles
/// stay in place and the error is also recorded on the list view.
pub async fn load_profiles(ctx: &AppContext) -> Result<usize, String> {
    execute_command("profiles::load_profiles", || async {
        ctx.list.read().await.load(ctx.profile_table.as_ref()).await
    })
    .await
}

/// Update the search query and return the filtered cards.
pub async fn search_profiles(ctx: &AppContext, query: String) -> Result<ProfileListView, String> {
    execute_command("profiles::search_profiles", || async {
        let mut list = ctx.list.write().await;
        list.set_query(query);
        Ok(list.view())
    })
    .await
}

pub async fn list_view(ctx: &AppContext) -> Result<ProfileListView, String> {
    execute_command("profiles::list_view", || async { Ok(ctx.list.read().await.view()) }).await
}

/// "View on map" from a card: select the profile and show the popup.
pub async fn view_on_map(ctx: &AppContext, profile_id: String) -> Result<MapScene, String> {
    execute_command("profiles::view_on_map", || async {
        ctx.list.write().await.view_on_map(&profile_id)?;
        Ok(current_scene(ctx))
    })
    .await
}

pub async fn close_map(ctx: &AppContext) -> Result<ProfileListView, String> {
    execute_command("profiles::close_map", || async {
        let mut list = ctx.list.write().await;
        list.close_map();
        Ok(list.view())
    })
    .await
}

/// Markers for every profile with usable coordinates.
pub async fn map_scene(ctx: &AppContext) -> Result<MapScene, String> {
    execute_command("profiles::map_scene", || async { Ok(current_scene(ctx)) }).await
}

/// Marker click on the map.
pub async fn select_marker(ctx: &AppContext, profile_id: String) -> Result<MapScene, String> {
    execute_command("profiles::select_marker", || async { select_and_render(ctx, &profile_id) })
        .await
}

fn select_and_render(ctx: &AppContext, profile_id: &str) -> DomainResult<MapScene> {
    ctx.map.lock().select_marker(profile_id)?;
    Ok(current_scene(ctx))
}

fn current_scene(ctx: &AppContext) -> MapScene {
    let mut map = ctx.map.lock();
    map.sync_selection();
    map.render(&ctx.store.profiles())
}
