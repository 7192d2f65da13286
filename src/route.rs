//! Page Routes
//!
//! Pages are served by the backend; the path decides which view to mount.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    TodoList,
    Logout,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::TodoList => "/todo_list",
            Route::Logout => "/logout",
        }
    }
}

/// What to do for the current location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    TodoList,
    Redirect(Route),
}

pub fn resolve(path: &str) -> Page {
    let trimmed = path.trim_end_matches('/');
    match trimmed {
        "" => Page::Redirect(Route::TodoList),
        "/login" => Page::Login,
        _ => Page::TodoList,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("/"), Page::Redirect(Route::TodoList));
        assert_eq!(resolve("/login"), Page::Login);
        assert_eq!(resolve("/login/"), Page::Login);
        assert_eq!(resolve("/todo_list"), Page::TodoList);
        assert_eq!(resolve("/anything"), Page::TodoList);
    }
}
