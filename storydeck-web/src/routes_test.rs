//! Tests for the routing system
//!
//! Validates route definitions, navigation visibility rules, and URL paths
//! for the story application's routing infrastructure.

#[cfg(test)]
mod tests {
    use crate::routes::{MainRoute, nav_routes};
    use yew_router::Routable;

    /// Tests route enum variants
    #[test]
    fn test_route_variants() {
        let home = MainRoute::Home;
        let login = MainRoute::Login;
        let submit = MainRoute::Submit;
        let favorites = MainRoute::Favorites;
        let my_stories = MainRoute::MyStories;
        let profile = MainRoute::Profile;
        let not_found = MainRoute::NotFound;

        assert!(format!("{home:?}").contains("Home"));
        assert!(format!("{login:?}").contains("Login"));
        assert!(format!("{submit:?}").contains("Submit"));
        assert!(format!("{favorites:?}").contains("Favorites"));
        assert!(format!("{my_stories:?}").contains("MyStories"));
        assert!(format!("{profile:?}").contains("Profile"));
        assert!(format!("{not_found:?}").contains("NotFound"));
    }

    /// Tests route paths
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Submit.to_path(), "/submit");
        assert_eq!(MainRoute::Favorites.to_path(), "/favorites");
        assert_eq!(MainRoute::MyStories.to_path(), "/my-stories");
        assert_eq!(MainRoute::Profile.to_path(), "/profile");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    /// Tests route equality and cloning
    #[test]
    fn test_route_equality() {
        let route1 = MainRoute::Favorites;
        let route2 = MainRoute::Favorites;
        assert_eq!(route1, route2);
        assert_eq!(route1.clone(), route2);
        assert_ne!(MainRoute::Home, MainRoute::Submit);
    }

    /// Tests nav visibility while logged out
    #[test]
    fn test_nav_routes_logged_out() {
        assert_eq!(nav_routes(false), vec![MainRoute::Home]);
    }

    /// Tests nav visibility while logged in
    #[test]
    fn test_nav_routes_logged_in() {
        assert_eq!(
            nav_routes(true),
            vec![
                MainRoute::Home,
                MainRoute::Submit,
                MainRoute::Favorites,
                MainRoute::MyStories,
            ]
        );
    }

    /// Tests that login, profile, and 404 never appear in the nav
    #[test]
    fn test_nav_routes_exclude_non_nav_pages() {
        for is_authenticated in [false, true] {
            let routes = nav_routes(is_authenticated);
            assert!(!routes.contains(&MainRoute::Login));
            assert!(!routes.contains(&MainRoute::Profile));
            assert!(!routes.contains(&MainRoute::NotFound));
        }
    }

    /// Tests nav labels
    #[test]
    fn test_nav_labels() {
        assert_eq!(MainRoute::Home.nav_label(), "all");
        assert_eq!(MainRoute::Submit.nav_label(), "submit");
        assert_eq!(MainRoute::Favorites.nav_label(), "favorites");
        assert_eq!(MainRoute::MyStories.nav_label(), "my stories");
        assert_eq!(MainRoute::Profile.nav_label(), "profile");
    }
}
