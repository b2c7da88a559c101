//! Application routes.

use serde::{Deserialize, Serialize};

/// A navigable page of the application.
///
/// `ALL` is the sidebar order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Dashboard,
    Invoices,
    Triage,
    Customers,
    Suppliers,
    Inventory,
    Expenses,
    Reports,
    Settings,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Dashboard,
        Route::Invoices,
        Route::Triage,
        Route::Customers,
        Route::Suppliers,
        Route::Inventory,
        Route::Expenses,
        Route::Reports,
        Route::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Invoices => "/invoices",
            Route::Triage => "/triage",
            Route::Customers => "/customers",
            Route::Suppliers => "/suppliers",
            Route::Inventory => "/inventory",
            Route::Expenses => "/expenses",
            Route::Reports => "/reports",
            Route::Settings => "/settings",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|r| r.path() == path)
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/login"), None);
    }
}
