//! # Node Bootstrap Tests
//!
//! End-to-end through `remit-node`: configuration → wiring → engine ops.

#[cfg(test)]
mod tests {
    use remit_bus::{EventFilter, EventSubscriber, TransferEvent};
    use remit_node::{bootstrap, NodeConfig};

    const SENDER: [u8; 32] = [0x51; 32];
    const RECIPIENT: [u8; 32] = [0x52; 32];

    #[tokio::test]
    async fn test_bootstrapped_node_runs_a_full_transfer() {
        let runtime = bootstrap(&NodeConfig::default()).unwrap();
        let mut events = runtime.bus.subscribe(EventFilter::all());

        runtime.fund(SENDER, 5_000).unwrap();
        let record = runtime
            .engine
            .send_transfer(SENDER, RECIPIENT, 2_000, Some("demo".into()))
            .unwrap();
        runtime
            .engine
            .receive_transfer(RECIPIENT, record.address)
            .unwrap();

        // Default config is 50 bps: 2000 → 1990 net, 10 fee.
        let completed = runtime.engine.transfer(&record.address).unwrap().unwrap();
        assert!(completed.is_completed());
        assert_eq!(runtime.engine.vault_balance(&record.address).unwrap(), 0);

        let created = events.recv().await.expect("created event");
        assert!(matches!(created, TransferEvent::TransferCreated { .. }));
        match events.recv().await.expect("completed event") {
            TransferEvent::TransferCompleted { fee, .. } => assert_eq!(fee, 10),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_config_refuses_to_bootstrap() {
        let config = NodeConfig {
            fee_bps: 20_000,
            ..Default::default()
        };
        assert!(bootstrap(&config).is_err());
    }
}
