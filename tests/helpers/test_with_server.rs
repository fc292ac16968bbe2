#[macro_export]
macro_rules! test_with_server {
    ($name:ident, |$server:ident, $ctx_state:ident, $config:ident| $body:block) => {
        #[tokio::test(flavor = "multi_thread")]
        #[serial_test::serial]
        async fn $name() {
            use axum_test::TestServer;
            use tuiter_server::config::AppConfig;
            use tuiter_server::database::client::{Database, DbConfig};
            use tuiter_server::middleware::mw_ctx::create_ctx_state;

            let $config = AppConfig {
                db_namespace: "test".to_string(),
                db_database: "test".to_string(),
                db_password: None,
                db_username: None,
                db_url: "mem://".to_string(),
                jwt_secret: "secret".to_string(),
                server_port: 0,
            };

            let $ctx_state = {
                let db = Database::connect(DbConfig {
                    url: &$config.db_url,
                    database: &$config.db_database,
                    namespace: &$config.db_namespace,
                    password: $config.db_password.as_deref(),
                    username: $config.db_username.as_deref(),
                })
                .await
                .expect("connect test db");

                db.run_migrations().await.expect("migrations run");
                create_ctx_state(db, &$config)
            };

            let routes_all = tuiter_server::init::main_router(&$ctx_state);
            let $server = TestServer::new(routes_all).expect("Failed to create test server");

            $body
        }
    };
}
