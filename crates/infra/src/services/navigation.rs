//! Navigator that records and logs route changes.

use parking_lot::Mutex;
use sparta_core::Navigator;
use sparta_domain::Route;
use tracing::info;

#[derive(Debug, Default)]
pub struct LoggingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl LoggingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_route(&self) -> Option<Route> {
        self.routes.lock().last().copied()
    }

    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }
}

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: Route) {
        info!(route = route.path(), "Navigate");
        self.routes.lock().push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_routes_in_order() {
        let navigator = LoggingNavigator::new();
        assert_eq!(navigator.last_route(), None);

        navigator.navigate(Route::Back);
        navigator.navigate(Route::StudentDashboard);
        assert_eq!(navigator.routes(), vec![Route::Back, Route::StudentDashboard]);
        assert_eq!(navigator.last_route(), Some(Route::StudentDashboard));
    }
}
