use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-content">
                <img src="/assets/logo.png" alt="CourseHub" width="140" height="36"/>
                <ul class="footer-links">
                    <li><a href="/">"Courses"</a></li>
                    <li><a href="/register">"Create an account"</a></li>
                    <li><a href="/login">"Login"</a></li>
                </ul>
                <p class="footer-copy">"© CourseHub. All rights reserved."</p>
            </div>
        </footer>
    }
}
