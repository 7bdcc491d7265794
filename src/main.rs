#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    cv_generator_server::run().await
}
