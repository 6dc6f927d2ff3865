//! Root application component with routing and context providers.

use coursehub::guard::IntentSlot;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides the app-wide intent slot and auth state, and sets up client-side
/// routing. `/profile` and `/my-courses` are restricted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(IntentSlot::new());
    provide_context(RwSignal::new(AuthState::new()));

    view! {
        <Title text="CourseHub"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("profile") view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }/>
                    <Route path=StaticSegment("my-courses") view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
