// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

/// Liveness check
pub async fn health_http() -> &'static str {
    "ok"
}
