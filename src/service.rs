//! Mint service: the stable operation surface a rendering layer consumes.
//!
//! All mutating operations funnel through the session store, so every caller
//! and observer sees one consistent snapshot of progress. `set_selection`,
//! `toggle_connect` and `refresh` never propagate errors (failures become
//! error-severity hints); `mint` records a hint and also propagates, because
//! its caller needs to know the action did not complete.

use std::sync::{Arc, Weak};
use std::time::Duration;

use futures::FutureExt;
use log::{debug, error, info, warn};

use crate::constants::{CLUSTER, DEFAULT_ENDPOINTS, INTER_MINT_PAUSE_MS, SELECTED_TIER_KEY};
use crate::errors::{MintError, Result};
use crate::guards::{candidate_labels, payment_lamports, resolve_guards};
use crate::orchestrator::{build_submission, EphemeralSigner};
use crate::prefs::PreferenceStore;
use crate::pricing::{clamp_quantity, derive_readiness, lamports_to_sol, total_sol};
use crate::rpc::{EndpointPool, MachineSnapshot, SignedSubmission, SubmissionReceipt};
use crate::selection::{self, Tier};
use crate::store::{HintSeverity, SessionSnapshot, SessionStore, SnapshotObserver};
use crate::wallet::{abbr_address, WalletBridge, WalletEvent, WalletEventListener, WalletProvider};

pub struct MintService {
    store: Arc<SessionStore>,
    pool: EndpointPool,
    bridge: WalletBridge,
    prefs: Arc<dyn PreferenceStore>,
}

impl MintService {
    /// Service over the default endpoint list.
    pub fn new(
        provider: Option<Arc<dyn WalletProvider>>,
        prefs: Arc<dyn PreferenceStore>,
    ) -> Arc<Self> {
        let endpoints = DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect();
        Self::with_endpoints(endpoints, provider, prefs)
    }

    pub fn with_endpoints(
        endpoints: Vec<String>,
        provider: Option<Arc<dyn WalletProvider>>,
        prefs: Arc<dyn PreferenceStore>,
    ) -> Arc<Self> {
        let store = Arc::new(SessionStore::new(CLUSTER, endpoints[0].clone()));
        let pool = EndpointPool::http(endpoints, store.clone());
        Self::with_parts(store, pool, provider, prefs)
    }

    /// Assemble from pre-built parts. The pool must share `store`.
    pub fn with_parts(
        store: Arc<SessionStore>,
        pool: EndpointPool,
        provider: Option<Arc<dyn WalletProvider>>,
        prefs: Arc<dyn PreferenceStore>,
    ) -> Arc<Self> {
        let bridge = WalletBridge::new(provider, store.clone());
        Arc::new(Self {
            store,
            pool,
            bridge,
            prefs,
        })
    }

    /// Startup: restore the persisted selection, wire provider events and
    /// attempt a silent reconnect. A missing or corrupt preference reads as
    /// "no prior selection".
    pub async fn init(self: &Arc<Self>) {
        self.bridge.subscribe(Arc::new(ProviderEvents {
            service: Arc::downgrade(self),
        }));

        if let Some(raw) = self.prefs.get(SELECTED_TIER_KEY) {
            if selection::resolve(&raw).is_some() {
                self.set_selection(&raw).await;
            } else {
                debug!("Ignoring unknown persisted tier {:?}", raw);
            }
        }

        if self.bridge.try_silent_connect().await.is_some() {
            self.refresh().await;
        }
    }

    /// Resolve a selection, persist it and refresh. Always completes; an
    /// unresolved input surfaces as an error hint.
    pub async fn set_selection(&self, raw: &str) {
        let Some(sel) = selection::resolve(raw) else {
            warn!("Unresolved tier selection {:?}", raw);
            self.store.update(|state| {
                state.ready = false;
                state.set_hint(
                    HintSeverity::Error,
                    MintError::SelectionUnresolved(raw.to_string()).to_string(),
                );
            });
            return;
        };

        self.prefs.set(SELECTED_TIER_KEY, &sel.raw);
        self.store.update(|state| {
            state.tier = Some(sel.tier);
            state.tier_raw = Some(sel.raw.clone());
            state.machine_address = Some(sel.machine_address.to_string());
            state.matched_group = None;
            state.set_hint(HintSeverity::Info, format!("Selected: {}", sel.label));
        });
        self.refresh().await;
    }

    /// Connect or disconnect the wallet based on current state.
    pub async fn toggle_connect(&self) {
        if self.bridge.is_connected() {
            self.bridge.disconnect().await;
        } else {
            match self.bridge.connect().await {
                Ok(_) => self.refresh().await,
                Err(err) => {
                    warn!("Wallet connect failed: {}", err);
                    self.store.set_hint(HintSeverity::Error, err.to_string());
                }
            }
        }
    }

    /// Fetch machine and guards, recompute readiness and price. Never
    /// propagates; failures become an error hint naming the machine.
    pub async fn refresh(&self) {
        let snapshot = self.store.snapshot();
        let Some(machine_address) = snapshot.machine_address.clone() else {
            self.store
                .set_hint(HintSeverity::Info, "Select a tier to load mint details.");
            return;
        };

        if let Err(err) = self
            .load_machine_state(&machine_address, snapshot.tier_raw.as_deref(), snapshot.tier)
            .await
        {
            error!("Refresh failed for {}: {}", machine_address, err);
            let message = describe_remote_failure(&machine_address, &err);
            self.store.update(|state| {
                state.ready = false;
                state.set_hint(HintSeverity::Error, message);
            });
        }
    }

    /// Mint `quantity` units sequentially. Preconditions fail fast before any
    /// network call; the first submission failure aborts the remainder.
    pub async fn mint(&self, quantity: u64) -> Result<()> {
        {
            let snapshot = self.store.snapshot();
            if snapshot.busy {
                let label = snapshot.busy_label.unwrap_or_else(|| "mint".to_string());
                return self.fail_fast(MintError::OperationInProgress(label));
            }
            if snapshot.tier.is_none() {
                let raw = snapshot.tier_raw.unwrap_or_default();
                return self.fail_fast(MintError::SelectionUnresolved(raw));
            }
            if !snapshot.connected {
                return self.fail_fast(MintError::NoProvider);
            }
            if !snapshot.ready {
                let err = if snapshot.remaining == Some(0) {
                    MintError::SoldOut
                } else {
                    MintError::NotReady
                };
                return self.fail_fast(err);
            }
        }

        self.store.update(|state| {
            state.busy = true;
            state.busy_label = Some("Preparing mint…".to_string());
        });

        // Busy must clear on both paths, including the early-return errors
        // inside mint_sequence.
        let result = self.mint_sequence(quantity).await;
        self.store.update(|state| {
            state.busy = false;
            state.busy_label = None;
        });

        match result {
            Ok(minted) => {
                self.refresh().await;
                self.store
                    .set_hint(HintSeverity::Ok, format!("Minted {} item(s).", minted));
                Ok(())
            }
            Err(err) => {
                error!("Mint failed: {}", err);
                let message = {
                    let snapshot = self.store.snapshot();
                    let machine = snapshot.machine_address.as_deref().unwrap_or("machine");
                    describe_remote_failure(machine, &err)
                };
                self.store.set_hint(HintSeverity::Error, message);
                Err(err)
            }
        }
    }

    /// Deep, independent copy of the session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.store.snapshot()
    }

    /// Register an observer for broadcast-on-mutation.
    pub fn subscribe(&self, observer: Arc<dyn SnapshotObserver>) {
        self.store.subscribe(observer);
    }

    async fn mint_sequence(&self, quantity: u64) -> Result<u64> {
        let snapshot = self.store.snapshot();
        let machine_address = snapshot
            .machine_address
            .clone()
            .ok_or_else(|| MintError::SelectionUnresolved(String::new()))?;
        let identity = self.bridge.attach_identity()?;

        // Freshness: the readiness shown to the user may be stale by now.
        self.set_busy_label("Loading machine…");
        let machine = self.fetch_machine(&machine_address).await?;
        if machine.items_remaining() == 0 {
            return Err(MintError::SoldOut);
        }

        let document = self
            .fetch_guard_document(&machine)
            .await?
            .ok_or_else(|| MintError::RuleDocumentMissing(machine.address.clone()))?;
        let candidates = candidate_labels(snapshot.tier_raw.as_deref(), snapshot.tier);
        let resolved = resolve_guards(&document, &candidates);

        let effective = clamp_quantity(quantity, resolved.recommended_limit());
        let price = payment_lamports(&resolved.guards).map(lamports_to_sol);
        self.store.update(|state| {
            state.matched_group = resolved.matched_label.clone();
            state.price_sol = price;
            state.total_sol = price.map(|p| total_sol(p, effective));
        });

        for unit in 0..effective {
            let signer = EphemeralSigner::generate();
            let nft_mint = signer.address();
            let request = build_submission(&machine, &identity.address, &nft_mint, &resolved)?;

            self.set_busy_label(format!("Awaiting signature ({}/{})…", unit + 1, effective));
            let payload = serde_json::to_vec(&request)
                .map_err(|e| MintError::SubmissionFailed(e.to_string()))?;
            let mint_signature = signer.sign(&payload);
            let wallet_signature = identity.sign(&request).await?;
            let signed = SignedSubmission {
                request,
                signatures: vec![mint_signature, wallet_signature],
            };

            self.set_busy_label(format!("Confirming ({}/{})…", unit + 1, effective));
            let receipt = self.submit(&signed).await?;
            info!("Mint {}/{} confirmed: {}", unit + 1, effective, receipt.signature);

            if unit + 1 < effective {
                tokio::time::sleep(Duration::from_millis(INTER_MINT_PAUSE_MS)).await;
            }
        }

        Ok(effective)
    }

    async fn load_machine_state(
        &self,
        machine_address: &str,
        tier_raw: Option<&str>,
        tier: Option<Tier>,
    ) -> Result<()> {
        let machine = self.fetch_machine(machine_address).await?;
        let document = self.fetch_guard_document(&machine).await?;
        let resolved = document.as_ref().map(|doc| {
            let candidates = candidate_labels(tier_raw, tier);
            resolve_guards(doc, &candidates)
        });

        let remaining = machine.items_remaining();
        let readiness = derive_readiness(remaining, resolved.as_ref());

        self.store.update(|state| {
            state.available = Some(machine.items_available);
            state.redeemed = Some(machine.items_redeemed);
            state.remaining = Some(remaining);
            state.matched_group = resolved.as_ref().and_then(|r| r.matched_label.clone());
            state.price_sol = readiness.price_sol;
            state.total_sol = readiness.price_sol.map(|p| total_sol(p, 1));
            state.ready = readiness.ready;
            let severity = if readiness.ready {
                HintSeverity::Ok
            } else {
                HintSeverity::Warn
            };
            state.set_hint(severity, readiness.hint.clone());
        });
        Ok(())
    }

    async fn fetch_machine(&self, address: &str) -> Result<MachineSnapshot> {
        let address = address.to_string();
        self.pool
            .with_failover(move |client| {
                let address = address.clone();
                async move { client.fetch_machine(&address).await }.boxed()
            })
            .await
    }

    async fn fetch_guard_document(
        &self,
        machine: &MachineSnapshot,
    ) -> Result<Option<crate::guards::GuardDocument>> {
        let mint_authority = machine.mint_authority.clone();
        self.pool
            .with_failover(move |client| {
                let mint_authority = mint_authority.clone();
                async move { client.fetch_guard_document(&mint_authority).await }.boxed()
            })
            .await
    }

    async fn submit(&self, signed: &SignedSubmission) -> Result<SubmissionReceipt> {
        let signed = signed.clone();
        self.pool
            .with_failover(move |client| {
                let signed = signed.clone();
                async move { client.submit(&signed).await }.boxed()
            })
            .await
    }

    fn set_busy_label(&self, label: impl Into<String>) {
        let label = label.into();
        self.store.update(|state| state.busy_label = Some(label));
    }

    fn fail_fast(&self, err: MintError) -> Result<()> {
        self.store
            .set_hint(HintSeverity::Error, err.to_string());
        Err(err)
    }
}

/// Degrade transient connectivity failures to a generic message; everything
/// else keeps its own description, prefixed with the machine it concerns.
fn describe_remote_failure(machine_address: &str, err: &MintError) -> String {
    match err {
        MintError::TransientEndpoint { .. } | MintError::Network(_) => format!(
            "Could not reach any RPC endpoint for {}. Check your connection and retry.",
            machine_address
        ),
        other => format!("{}: {}", machine_address, other),
    }
}

/// Bridges provider-pushed wallet events into store transitions plus a
/// follow-up refresh.
struct ProviderEvents {
    service: Weak<MintService>,
}

impl WalletEventListener for ProviderEvents {
    fn on_event(&self, event: WalletEvent) {
        let Some(service) = self.service.upgrade() else {
            return;
        };

        match &event {
            WalletEvent::Connected { address } | WalletEvent::AccountChanged {
                address: Some(address),
            } => {
                let short = abbr_address(address);
                service.store.update(|state| {
                    state.connected = true;
                    state.address_short = Some(short.clone());
                });
            }
            WalletEvent::Disconnected | WalletEvent::AccountChanged { address: None } => {
                service.store.update(|state| {
                    state.connected = false;
                    state.address_short = None;
                    state.ready = false;
                });
            }
        }

        tokio::spawn(async move { service.refresh().await });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FailoverClass;
    use crate::guards::{GuardDocument, GuardGroup, GuardSet};
    use crate::prefs::MemoryPreferenceStore;
    use crate::rpc::LedgerRpc;
    use crate::store::RecordingObserver;
    use crate::wallet::MockWalletProvider;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    const WALLET: &str = "9mG7vEEABrX5X4mg9WCAa17XpCxR28Ute2iEaDbHTJtD";

    /// Scriptable ledger gateway shared across pool rebuilds.
    #[derive(Default)]
    struct ScriptedLedger {
        machine: Mutex<Option<MachineSnapshot>>,
        document: Mutex<Option<GuardDocument>>,
        submissions: Mutex<Vec<SignedSubmission>>,
        fail_next_submit: AtomicBool,
        in_flight: AtomicBool,
    }

    struct ScriptedClient {
        endpoint: String,
        ledger: Arc<ScriptedLedger>,
    }

    #[async_trait]
    impl LedgerRpc for ScriptedClient {
        fn endpoint(&self) -> &str {
            &self.endpoint
        }

        async fn fetch_machine(&self, address: &str) -> Result<MachineSnapshot> {
            self.ledger
                .machine
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| MintError::Rpc {
                    endpoint: self.endpoint.clone(),
                    message: format!("machine {} not found", address),
                })
        }

        async fn fetch_guard_document(&self, _: &str) -> Result<Option<GuardDocument>> {
            Ok(self.ledger.document.lock().unwrap().clone())
        }

        async fn submit(&self, submission: &SignedSubmission) -> Result<SubmissionReceipt> {
            // Submissions must never overlap within one mint call.
            assert!(
                !self.ledger.in_flight.swap(true, Ordering::SeqCst),
                "overlapping submissions"
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.ledger.in_flight.store(false, Ordering::SeqCst);

            if self.ledger.fail_next_submit.swap(false, Ordering::SeqCst) {
                return Err(MintError::SubmissionFailed("simulated failure".to_string()));
            }
            self.ledger
                .submissions
                .lock()
                .unwrap()
                .push(submission.clone());
            Ok(SubmissionReceipt {
                signature: format!("sig-{}", submission.request.nft_mint),
                confirmed: true,
            })
        }
    }

    fn make_machine() -> MachineSnapshot {
        MachineSnapshot {
            address: crate::constants::MACHINE_BIGGEN.to_string(),
            items_available: 500,
            items_redeemed: 10,
            mint_authority: "Auth1".to_string(),
            collection_mint: Some("Coll1".to_string()),
            collection_update_authority: Some("Upd1".to_string()),
        }
    }

    fn make_document() -> GuardDocument {
        let mut default = GuardSet::new();
        default.insert("solPayment".to_string(), json!(1_000_000_000u64));
        let mut vip = GuardSet::new();
        vip.insert("solPayment".to_string(), json!(500_000_000u64));
        vip.insert("mintLimit".to_string(), json!({ "id": 1, "limit": 3 }));
        GuardDocument {
            default,
            groups: vec![GuardGroup {
                label: "biggen".to_string(),
                guards: vip,
            }],
        }
    }

    struct Harness {
        service: Arc<MintService>,
        ledger: Arc<ScriptedLedger>,
        provider: Arc<MockWalletProvider>,
        store: Arc<SessionStore>,
        prefs: Arc<MemoryPreferenceStore>,
    }

    fn make_harness() -> Harness {
        let ledger = Arc::new(ScriptedLedger::default());
        *ledger.machine.lock().unwrap() = Some(make_machine());
        *ledger.document.lock().unwrap() = Some(make_document());

        let store = Arc::new(SessionStore::new("devnet", "ep-test"));
        let pool_ledger = ledger.clone();
        let pool = EndpointPool::new(
            vec!["ep-test".to_string()],
            store.clone(),
            Box::new(move |endpoint| {
                Arc::new(ScriptedClient {
                    endpoint: endpoint.to_string(),
                    ledger: pool_ledger.clone(),
                })
            }),
        );
        let provider = Arc::new(MockWalletProvider::new(WALLET));
        let prefs = Arc::new(MemoryPreferenceStore::new());
        let service = MintService::with_parts(
            store.clone(),
            pool,
            Some(provider.clone()),
            prefs.clone(),
        );
        Harness {
            service,
            ledger,
            provider,
            store,
            prefs,
        }
    }

    async fn connect_and_select(harness: &Harness) {
        harness.service.toggle_connect().await;
        harness.service.set_selection("biggen").await;
    }

    #[tokio::test]
    async fn test_set_selection_persists_and_refreshes() {
        let harness = make_harness();
        harness.service.set_selection("biggen").await;

        assert_eq!(
            harness.prefs.get(SELECTED_TIER_KEY).as_deref(),
            Some("biggen")
        );
        let snapshot = harness.service.snapshot();
        assert_eq!(snapshot.tier, Some(Tier::BigGen));
        assert_eq!(snapshot.remaining, Some(490));
        // The biggen group overrides the base price.
        assert_eq!(snapshot.price_sol, Some(dec!(0.5)));
        assert_eq!(snapshot.matched_group.as_deref(), Some("biggen"));
        assert!(snapshot.ready);
    }

    #[tokio::test]
    async fn test_unknown_selection_becomes_error_hint() {
        let harness = make_harness();
        harness.service.set_selection("megagen").await;

        let snapshot = harness.service.snapshot();
        assert_eq!(snapshot.hint_severity, HintSeverity::Error);
        assert!(snapshot.hint.contains("megagen"));
        assert!(snapshot.tier.is_none());
        assert!(!snapshot.ready);
    }

    #[tokio::test]
    async fn test_refresh_failure_hints_machine_address() {
        let harness = make_harness();
        harness.service.set_selection("biggen").await;
        *harness.ledger.machine.lock().unwrap() = None;

        harness.service.refresh().await;
        let snapshot = harness.service.snapshot();
        assert_eq!(snapshot.hint_severity, HintSeverity::Error);
        assert!(snapshot.hint.contains(crate::constants::MACHINE_BIGGEN));
        assert!(!snapshot.ready);
    }

    #[tokio::test]
    async fn test_toggle_connect_round_trip() {
        let harness = make_harness();
        harness.service.toggle_connect().await;
        assert!(harness.service.snapshot().connected);

        harness.service.toggle_connect().await;
        let snapshot = harness.service.snapshot();
        assert!(!snapshot.connected);
        assert!(snapshot.address_short.is_none());
    }

    #[tokio::test]
    async fn test_mint_two_units_submits_sequentially() {
        let harness = make_harness();
        connect_and_select(&harness).await;

        harness.service.mint(2).await.unwrap();

        let submissions = harness.ledger.submissions.lock().unwrap().clone();
        assert_eq!(submissions.len(), 2);
        // Each unit got its own disposable signer.
        assert_ne!(
            submissions[0].request.nft_mint,
            submissions[1].request.nft_mint
        );
        // Group label and mint-limit argument rode along.
        assert_eq!(submissions[0].request.group_label.as_deref(), Some("biggen"));
        assert!(submissions[0].request.mint_limit.is_some());
        // Wallet signed each unit individually.
        assert_eq!(harness.provider.signed().len(), 2);

        let snapshot = harness.service.snapshot();
        assert!(!snapshot.busy);
        assert_eq!(snapshot.hint_severity, HintSeverity::Ok);
    }

    #[tokio::test]
    async fn test_first_submission_failure_aborts_remainder() {
        let harness = make_harness();
        connect_and_select(&harness).await;
        harness.ledger.fail_next_submit.store(true, Ordering::SeqCst);

        let result = harness.service.mint(2).await;
        assert!(matches!(result, Err(MintError::SubmissionFailed(_))));
        // The failed unit never landed and the second was never attempted.
        assert!(harness.ledger.submissions.lock().unwrap().is_empty());
        assert_eq!(harness.provider.signed().len(), 1);

        let snapshot = harness.service.snapshot();
        assert!(!snapshot.busy);
        assert_eq!(snapshot.hint_severity, HintSeverity::Error);
    }

    #[tokio::test]
    async fn test_quantity_clamped_to_recommended_limit() {
        let harness = make_harness();
        connect_and_select(&harness).await;

        // Guard mintLimit.limit is 3; requesting 10 mints 3.
        harness.service.mint(10).await.unwrap();
        assert_eq!(harness.ledger.submissions.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_mint_preconditions_fail_fast() {
        let harness = make_harness();

        // No selection, not connected.
        assert!(matches!(
            harness.service.mint(1).await,
            Err(MintError::SelectionUnresolved(_))
        ));

        harness.service.set_selection("biggen").await;
        assert!(matches!(
            harness.service.mint(1).await,
            Err(MintError::NoProvider)
        ));

        // Nothing reached the ledger.
        assert!(harness.ledger.submissions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mint_while_busy_is_rejected() {
        let harness = make_harness();
        connect_and_select(&harness).await;

        harness.store.update(|state| {
            state.busy = true;
            state.busy_label = Some("mint".to_string());
        });
        assert!(matches!(
            harness.service.mint(1).await,
            Err(MintError::OperationInProgress(_))
        ));
    }

    #[tokio::test]
    async fn test_sold_out_machine_rejects_mint() {
        let harness = make_harness();
        connect_and_select(&harness).await;

        let mut machine = make_machine();
        machine.items_redeemed = machine.items_available;
        *harness.ledger.machine.lock().unwrap() = Some(machine);
        harness.service.refresh().await;

        assert!(matches!(
            harness.service.mint(1).await,
            Err(MintError::SoldOut)
        ));
    }

    #[tokio::test]
    async fn test_missing_guard_document_fails_mint() {
        let harness = make_harness();
        connect_and_select(&harness).await;
        *harness.ledger.document.lock().unwrap() = None;

        let result = harness.service.mint(1).await;
        assert!(matches!(result, Err(MintError::RuleDocumentMissing(_))));
    }

    #[tokio::test]
    async fn test_init_restores_persisted_selection() {
        let harness = make_harness();
        harness.prefs.set(SELECTED_TIER_KEY, "littlegen");

        harness.service.init().await;
        let snapshot = harness.service.snapshot();
        assert_eq!(snapshot.tier, Some(Tier::LittleGen));
        // Silent connect adopted the trusted session.
        assert!(snapshot.connected);
    }

    #[tokio::test]
    async fn test_init_tolerates_corrupt_preference() {
        let harness = make_harness();
        harness.prefs.set(SELECTED_TIER_KEY, "not-a-tier");

        harness.service.init().await;
        let snapshot = harness.service.snapshot();
        assert!(snapshot.tier.is_none());
        // Startup must not degrade to an error state over a bad preference.
        assert_ne!(snapshot.hint_severity, HintSeverity::Error);
    }

    #[tokio::test]
    async fn test_provider_disconnect_event_updates_state() {
        let harness = make_harness();
        harness.service.init().await;
        assert!(harness.service.snapshot().connected);

        harness.provider.emit(WalletEvent::Disconnected);
        let snapshot = harness.service.snapshot();
        assert!(!snapshot.connected);
        assert!(!snapshot.ready);
    }

    #[tokio::test]
    async fn test_every_operation_broadcasts_snapshots() {
        let harness = make_harness();
        let observer = Arc::new(RecordingObserver::new());
        harness.service.subscribe(observer.clone());

        harness.service.set_selection("biggen").await;
        assert!(!observer.is_empty());
        let last = observer.last().unwrap();
        assert_eq!(last.tier, Some(Tier::BigGen));
    }

    #[test]
    fn test_transient_failures_degrade_to_connectivity_message() {
        let err = MintError::TransientEndpoint {
            endpoint: "ep".to_string(),
            message: "403".to_string(),
        };
        assert_eq!(err.failover_class(), FailoverClass::NextEndpoint);
        let message = describe_remote_failure("Hr9Y", &err);
        assert!(message.contains("Could not reach any RPC endpoint"));
        assert!(message.contains("Hr9Y"));

        let message = describe_remote_failure("Hr9Y", &MintError::SoldOut);
        assert!(message.contains("Sold out"));
    }
}
