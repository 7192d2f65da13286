//! Auth Commands

pub const LOGIN_PATH: &str = "/api/post_login_credentials";

#[cfg(test)]
mod tests {
    use crate::models::Credentials;

    #[test]
    fn test_credentials_body() {
        let body = serde_json::to_value(Credentials {
            login: "mykola".into(),
            password: "secret".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"login": "mykola", "password": "secret"}));
    }
}
