//! Repositories translating backend responses into results

pub mod ai;
pub mod smart_home;
pub mod user;

pub use ai::AiRepository;
pub use smart_home::SmartHomeRepository;
pub use user::UserRepository;

use tracing::error;

use crate::errors::ClientError;
use crate::http::client::ApiResponse;

/// Turn a raw response into a result.
///
/// Success requires both a 2xx status and a body. Anything else becomes a
/// [`ClientError::Status`] carrying the status code and error body.
pub fn into_result<T>(response: ApiResponse<T>, context: &str) -> Result<T, ClientError> {
    let successful = response.is_successful();
    match response.body {
        Some(body) if successful => Ok(body),
        _ => {
            let err = ClientError::status(context, response.status, response.error_body);
            error!("{}", err);
            Err(err)
        }
    }
}

/// Log a failed call before handing the error back unchanged
pub(crate) fn log_call_error(action: &str, err: ClientError) -> ClientError {
    error!(error = ?err, "Exception {}: {}", action, err);
    err
}
