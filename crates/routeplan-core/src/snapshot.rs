//! Immutable graph snapshots and their atomic publication
//!
//! A snapshot is built completely before it becomes visible. Readers take
//! an `Arc` to whichever snapshot is current and keep using it even after a
//! newer one is published.

use std::sync::{Arc, PoisonError, RwLock};

use crate::error::Result;
use crate::graph::{Graph, HeuristicTable};
use crate::loader::GraphDocument;
use crate::traffic::{TrafficContext, TrafficPredictor};

/// A graph and heuristics built for one traffic context
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    pub graph: Arc<Graph>,
    pub heuristics: HeuristicTable,
    /// `None` when no traffic prediction was applied
    pub context: Option<TrafficContext>,
}

impl GraphSnapshot {
    pub fn new(graph: Graph, heuristics: HeuristicTable, context: Option<TrafficContext>) -> Self {
        GraphSnapshot {
            graph: Arc::new(graph),
            heuristics,
            context,
        }
    }
}

/// Holds the current snapshot; publishing swaps it in one write
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<GraphSnapshot>>,
}

impl SnapshotStore {
    pub fn new(snapshot: GraphSnapshot) -> Self {
        SnapshotStore {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The snapshot readers should use right now
    pub fn current(&self) -> Arc<GraphSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Make `snapshot` current, returning the one it replaced
    pub fn publish(&self, snapshot: GraphSnapshot) -> Arc<GraphSnapshot> {
        self.swap(Arc::new(snapshot))
    }

    fn swap(&self, next: Arc<GraphSnapshot>) -> Arc<GraphSnapshot> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(
            nodes = next.graph.node_count(),
            edges = next.graph.edge_count(),
            context = ?next.context,
            "snapshot published"
        );
        std::mem::replace(&mut *guard, next)
    }

    /// Build a snapshot from `document` for `context` and publish it.
    ///
    /// On error nothing is published and the current snapshot stays.
    pub fn rebuild(
        &self,
        document: &GraphDocument,
        predictor: Option<&dyn TrafficPredictor>,
        context: Option<TrafficContext>,
    ) -> Result<Arc<GraphSnapshot>> {
        let snapshot = Arc::new(document.build(predictor, context)?);
        self.swap(Arc::clone(&snapshot));
        Ok(snapshot)
    }
}
