//! Static role-to-route access policy.
//!
//! One table answers every "may this role see this page?" question, replacing
//! per-page redirect-on-mount checks. Denial for an authenticated user is a
//! soft redirect to the dashboard, not a hard authorization failure — true
//! isolation is enforced by the backing store's security rules.

use vettrack_core::UserId;

use crate::{Role, Route};

/// Whether `role` may access `route`.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy lookup)
pub fn is_allowed(role: Role, route: Route) -> bool {
    match role {
        Role::Admin => true,
        Role::Cashier => matches!(
            route,
            Route::Dashboard | Route::Invoices | Route::Customers | Route::Expenses
        ),
        Role::Worker => matches!(
            route,
            Route::Dashboard
                | Route::Triage
                | Route::Suppliers
                | Route::Inventory
                | Route::Expenses
        ),
    }
}

/// Routes visible to `role`, in sidebar order. Used to build the menu.
pub fn allowed_routes(role: Role) -> Vec<Route> {
    Route::ALL
        .iter()
        .copied()
        .filter(|route| is_allowed(role, *route))
        .collect()
}

/// Authentication state as resolved by the external auth collaborator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated { user_id: UserId, role: Role },
}

/// Outcome of consulting the policy before rendering/dispatching a route.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    /// Unauthenticated access to a protected route.
    RedirectToLogin,
    /// Authenticated, but the role lacks the route. Soft denial.
    RedirectToDashboard,
}

/// Decide what to do with a navigation attempt.
pub fn resolve(state: AuthState, route: Route) -> RouteDecision {
    match state {
        AuthState::Anonymous => RouteDecision::RedirectToLogin,
        AuthState::Authenticated { role, .. } => {
            if is_allowed(role, route) {
                RouteDecision::Allow
            } else {
                RouteDecision::RedirectToDashboard
            }
        }
    }
}
