use crate::backend::Backend;
use crate::domain::user::CurrentUser;
use crate::services::ServiceResult;

/// Fetches the signed-in user for the header.
///
/// Any failure yields `None` so the page renders with an anonymous header.
pub async fn current_user<B>(backend: &B) -> Option<CurrentUser>
where
    B: Backend + ?Sized,
{
    match backend.get_json("/user/current", &[]).await {
        Ok(body) if !body.is_null() => serde_json::from_value(body)
            .inspect_err(|err| log::warn!("Unexpected current user payload: {err}"))
            .ok(),
        Ok(_) => None,
        Err(err) => {
            log::warn!("Failed to fetch current user: {err}");
            None
        }
    }
}

/// Logs out on the backend and returns where the browser should go next.
pub async fn logout<B>(backend: &B) -> ServiceResult<String>
where
    B: Backend + ?Sized,
{
    let location = backend.post_for_redirect("/user/logout").await?;
    Ok(location.unwrap_or_else(|| "/".to_string()))
}
