//! Connection pool tests

use sg_shared::DatabaseConfig;

use crate::database::DatabasePool;
use crate::InfrastructureError;

#[tokio::test]
async fn test_pool_creation_with_unparseable_url() {
    for url in ["not a database url", "mysql://user@:notaport/sessiongate"] {
        let config = DatabaseConfig::new(url);

        let result = DatabasePool::new(&config).await;
        assert!(
            matches!(result, Err(InfrastructureError::Config(_))),
            "{} should be rejected before connecting",
            url
        );
    }
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_pool_health_check() {
    let config = DatabaseConfig::from_env().unwrap().with_max_connections(2);

    let pool = DatabasePool::new(&config).await.unwrap();
    assert!(pool.health_check().await.unwrap());
    assert!(pool.get_statistics().max_connections == 2);

    pool.close().await;
}
