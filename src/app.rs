//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    change_password::ChangePasswordPage, edit_post::EditPostPage, forest::ForestPage,
    login::LoginPage, password_result::PasswordResultPage, post_detail::PostDetailPage,
    register_team::RegisterTeamPage, write_post::WritePostPage,
};
use crate::session::context::SessionContext;
use crate::state::register::RegistrationState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and registration hand-off state, then
/// sets up client-side routing. The session is resolved synchronously
/// from storage before any route component runs, so no routing decision
/// ever sees a half-initialized session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new();
    session.initialize();
    provide_context(session);

    let registration = RwSignal::new(RegistrationState::default());
    provide_context(registration);

    view! {
        <Stylesheet id="leptos" href="/pkg/took-client.css"/>
        <Title text="대나무숲"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/forest"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register-team") view=RegisterTeamPage/>
                <Route path=StaticSegment("team-created") view=PasswordResultPage/>
                <Route path=StaticSegment("forest") view=ForestPage/>
                <Route path=(StaticSegment("post"), ParamSegment("id")) view=PostDetailPage/>
                <Route path=StaticSegment("write") view=WritePostPage/>
                <Route path=(StaticSegment("edit"), ParamSegment("id")) view=EditPostPage/>
                <Route path=StaticSegment("change-password") view=ChangePasswordPage/>
            </Routes>
        </Router>
    }
}
