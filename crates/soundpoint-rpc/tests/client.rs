use std::time::Duration;

use soundpoint_core::{
    build_checkpoint, ChainIdentity, CheckpointError, CheckpointPlan, HeaderSet, SampleWindow,
};
use soundpoint_rpc::testing::MockChain;
use soundpoint_rpc::{PrefetchingSource, RpcClient, RpcConfig, RpcError};

fn quick_config() -> RpcConfig {
    RpcConfig {
        request_timeout: Duration::from_secs(5),
        ..RpcConfig::default()
    }
}

#[tokio::test]
async fn connect_reads_chain_id_and_tip() {
    let node = MockChain::new(11155111, 1_234).spawn().await.unwrap();
    let client = RpcClient::connect(&node.url(), &quick_config()).await.unwrap();

    assert_eq!(client.chain_id(), 11155111);
    assert_eq!(client.tip_height().await.unwrap(), 1_234);
    assert_eq!(client.endpoint(), node.url());
}

#[tokio::test]
async fn unreachable_endpoint_is_a_connection_error() {
    let err = RpcClient::connect("http://127.0.0.1:1", &quick_config())
        .await
        .unwrap_err();
    assert!(matches!(err, RpcError::Connection { .. }), "{err:?}");

    let err = RpcClient::connect("not a url", &quick_config())
        .await
        .unwrap_err();
    assert!(matches!(err, RpcError::Connection { .. }), "{err:?}");
}

#[tokio::test]
async fn fetch_header_returns_the_served_roots() {
    let node = MockChain::new(1, 50).spawn().await.unwrap();
    let client = RpcClient::connect(&node.url(), &quick_config()).await.unwrap();

    assert_eq!(client.fetch_header(42).await.unwrap(), MockChain::header(42));
    assert_eq!(node.requested_blocks(), vec![42]);
}

#[tokio::test]
async fn unknown_block_is_not_found() {
    let node = MockChain::new(1, 50).missing(7).spawn().await.unwrap();
    let client = RpcClient::connect(&node.url(), &quick_config()).await.unwrap();

    assert!(matches!(
        client.fetch_header(7).await,
        Err(RpcError::BlockNotFound(7))
    ));
    assert!(matches!(
        client.fetch_header(51).await,
        Err(RpcError::BlockNotFound(51))
    ));
}

#[tokio::test]
async fn node_error_surfaces_as_call_error() {
    let node = MockChain::new(1, 50).failing_on(9).spawn().await.unwrap();
    let client = RpcClient::connect(&node.url(), &quick_config()).await.unwrap();

    match client.fetch_header(9).await {
        Err(RpcError::Call { method, .. }) => assert_eq!(method, "eth_getBlockByNumber"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn inline_fetch_matches_in_memory_headers() {
    let node = MockChain::new(1, 500).spawn().await.unwrap();
    let mut client = RpcClient::connect(&node.url(), &quick_config()).await.unwrap();
    let window = SampleWindow::new(client.tip_height().await.unwrap(), 128, 4).unwrap();

    let from_rpc = build_checkpoint(ChainIdentity::resolve(1), window, &mut client)
        .await
        .unwrap();

    let mut local = HeaderSet::from_iter((373..=500).map(MockChain::header));
    let from_memory = build_checkpoint(ChainIdentity::resolve(1), window, &mut local)
        .await
        .unwrap();

    assert_eq!(from_rpc.commitment(), from_memory.commitment());
    assert_eq!(from_rpc.sampled_count(), 32);
    assert_eq!(from_rpc.start_height(), 373);

    let expected: Vec<u64> = window.sample().unwrap().iter().copied().collect();
    assert_eq!(node.requested_blocks(), expected);
}

#[tokio::test]
async fn prefetch_gives_the_same_commitment_as_inline_fetch() {
    let node = MockChain::new(137, 2_000).spawn().await.unwrap();
    let mut client = RpcClient::connect(&node.url(), &quick_config()).await.unwrap();
    let window = SampleWindow::new(2_000, 300, 3).unwrap();

    let inline = build_checkpoint(ChainIdentity::resolve(137), window, &mut client)
        .await
        .unwrap();

    let plan = CheckpointPlan::new(ChainIdentity::resolve(137), window).unwrap();
    let expected_count = plan.sequence().len() as u64;
    let mut source = PrefetchingSource::new(&client, plan.sequence().as_slice(), 16);
    let prefetched = plan.execute(&mut source).await.unwrap();

    assert_eq!(inline.commitment(), prefetched.commitment());
    assert_eq!(prefetched.sampled_count(), expected_count);
    assert_eq!(prefetched.network_label(), "Polygon");
}

#[tokio::test]
async fn prefetch_failure_aborts_at_the_failing_block() {
    let node = MockChain::new(1, 100).failing_on(92).spawn().await.unwrap();
    let client = RpcClient::connect(&node.url(), &quick_config()).await.unwrap();

    let window = SampleWindow::new(100, 17, 4).unwrap();
    let plan = CheckpointPlan::new(ChainIdentity::resolve(1), window).unwrap();
    assert_eq!(plan.sequence().as_slice(), &[100, 96, 92, 88, 84]);

    let mut source = PrefetchingSource::new(&client, plan.sequence().as_slice(), 4);
    let err = plan.execute(&mut source).await.unwrap_err();

    match &err {
        CheckpointError::HeaderFetch { number, source } => {
            assert_eq!(*number, 92);
            assert!(matches!(
                source.downcast_ref::<RpcError>(),
                Some(RpcError::Call { .. })
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn inline_failure_stops_fetching_after_the_failing_block() {
    let node = MockChain::new(1, 100).missing(92).spawn().await.unwrap();
    let mut client = RpcClient::connect(&node.url(), &quick_config()).await.unwrap();

    let window = SampleWindow::new(100, 17, 4).unwrap();
    let err = build_checkpoint(ChainIdentity::resolve(1), window, &mut client)
        .await
        .unwrap_err();

    assert!(matches!(err, CheckpointError::HeaderFetch { number: 92, .. }));
    assert_eq!(node.requested_blocks(), vec![100, 96, 92]);
}
