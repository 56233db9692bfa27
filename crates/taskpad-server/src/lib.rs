mod routes;

use anyhow::Result;
use taskpad_db::Db;
use taskpad_service::LocalService;
use tokio::net::TcpListener;

pub use routes::build_router;

pub async fn serve(listener: TcpListener, db: Db) -> Result<()> {
    let service = LocalService::new(db);
    let app = routes::build_router(service);
    axum::serve(listener, app).await?;
    Ok(())
}
