// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Landing page with the registration form

use axum::response::Html;

#[tracing::instrument(skip_all)]
pub async fn home_http() -> Html<&'static str> {
    Html(include_str!("index.html"))
}
