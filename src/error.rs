//! Client Errors
//!
//! Failure taxonomy for every user action, plus the notice shown for each.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Required input left empty; raised before any request is sent
    #[error("required field `{0}` is empty")]
    Validation(&'static str),
    #[error("unauthorized")]
    Unauthorized,
    #[error("server responded with status {status}")]
    Server { status: u16 },
    #[error("network failure: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// User action an error is reported for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    LoadItems,
    AddItem,
    RemoveItem,
}

impl ClientError {
    /// Text of the blocking notice shown to the user
    pub fn notice(&self, action: Action) -> &'static str {
        match (action, self) {
            (Action::AddItem, ClientError::Validation(_)) => "You can save only non-empty text!",
            (_, ClientError::Validation(_)) => "You can submit only non-empty values!",
            (Action::Login, ClientError::Unauthorized) => "Wrong login or password.",
            (Action::Login | Action::LoadItems, ClientError::Network(_)) => {
                "Server is unreachable. Check your connection and try again."
            }
            (Action::Login, _) => "Something went wrong on the server.",
            (Action::LoadItems, ClientError::Unauthorized) => {
                "Your session has expired. Please log in again."
            }
            (Action::LoadItems, _) => "Server is unavailable, can't load your items. Try again.",
            (Action::AddItem, _) => "Server is unavailable, can't save your item. Try again.",
            (Action::RemoveItem, _) => {
                "Server is unavailable, can't remove your item. Try again."
            }
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ClientError::Server { status: status.as_u16() }
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_notices() {
        assert_eq!(
            ClientError::Validation("login").notice(Action::Login),
            "You can submit only non-empty values!"
        );
        assert_eq!(ClientError::Unauthorized.notice(Action::Login), "Wrong login or password.");
        assert_eq!(
            ClientError::Server { status: 500 }.notice(Action::Login),
            "Something went wrong on the server."
        );
        assert_eq!(
            ClientError::Decode("eof".into()).notice(Action::Login),
            "Something went wrong on the server."
        );
    }

    #[test]
    fn test_item_notices() {
        assert_eq!(
            ClientError::Validation("item_value").notice(Action::AddItem),
            "You can save only non-empty text!"
        );
        assert_eq!(
            ClientError::Server { status: 503 }.notice(Action::AddItem),
            "Server is unavailable, can't save your item. Try again."
        );
        assert_eq!(
            ClientError::Server { status: 500 }.notice(Action::RemoveItem),
            "Server is unavailable, can't remove your item. Try again."
        );
    }

    #[test]
    fn test_network_failure_is_never_silent() {
        for action in [Action::Login, Action::LoadItems] {
            assert_eq!(
                ClientError::Network("offline".into()).notice(action),
                "Server is unreachable. Check your connection and try again."
            );
        }
    }

    #[test]
    fn test_network_failure_names_the_lost_item() {
        let offline = ClientError::Network("offline".into());
        assert_eq!(
            offline.notice(Action::AddItem),
            "Server is unavailable, can't save your item. Try again."
        );
        assert_eq!(
            offline.notice(Action::RemoveItem),
            "Server is unavailable, can't remove your item. Try again."
        );
    }

    #[test]
    fn test_expired_session_notice() {
        assert_eq!(
            ClientError::Unauthorized.notice(Action::LoadItems),
            "Your session has expired. Please log in again."
        );
    }
}
