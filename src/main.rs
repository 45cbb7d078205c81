use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use clinica::{config::Config, database};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    let pool = database::init_pool(&config.db);
    database::check_connection(&pool);

    let bind = config.bind_address();
    log::info!("Listening on http://{}", bind);

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .data(pool.clone())
            .configure(clinica::routes);
        match &static_dir {
            Some(dir) => app.service(actix_files::Files::new("/", dir).index_file("index.html")),
            None => app,
        }
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
