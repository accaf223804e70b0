//! Reactive state containers for the editor.
//!
//! A [`Store`] holds one state document and notifies subscribers whenever it
//! changes; [`EditorStores`] bundles the four documents the editor tracks
//! (flowchart data, drag state, grid settings, canvas state) and provides the
//! mutation operations the UI calls.
//!
//! Stores are plain values owned by the application root and passed to
//! whatever needs them; there are no module-level singletons. Everything is
//! single-threaded and synchronous: an update computes the new state, stores
//! it, and invokes every subscriber before returning.

use crate::types::{
    CanvasState, Connection, DragState, FlowchartData, FlowchartNode, GridSettings, NodeUpdate,
};

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// An observable container for a single state document.
///
/// Subscribers receive the current value immediately on subscription and the
/// new value synchronously after every [`Store::set`] or [`Store::update`],
/// in subscription order.
pub struct Store<T> {
    value: T,
    subscribers: Vec<(u64, Subscriber<T>)>,
    next_subscriber_id: u64,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Store<T> {
    /// Creates a store holding the given initial value.
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_subscriber_id: 0,
        }
    }

    /// Returns a reference to the current value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Registers a subscriber and immediately calls it with the current value.
    ///
    /// # Returns
    ///
    /// A [`SubscriberId`] that can be passed to [`Store::unsubscribe`].
    pub fn subscribe(&mut self, mut subscriber: impl FnMut(&T) + 'static) -> SubscriberId {
        subscriber(&self.value);
        let id = self.next_subscriber_id;
        self.next_subscriber_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        SubscriberId(id)
    }

    /// Removes a subscriber.
    ///
    /// # Returns
    ///
    /// `true` if the subscriber was registered, `false` if the id is unknown
    /// (already unsubscribed).
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id.0);
        self.subscribers.len() != before
    }

    /// Replaces the value wholesale and publishes it to all subscribers.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Computes a new value from the current one and publishes it.
    ///
    /// The closure must be pure; it receives the current value and returns
    /// the replacement. Subscribers are notified synchronously before this
    /// call returns.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        self.value = f(&self.value);
        self.notify();
    }

    fn notify(&mut self) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.value);
        }
    }
}

impl<T: Clone> Store<T> {
    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.value.clone()
    }
}

/// The four state documents of the editor, with their mutation operations.
///
/// Owned by the application root and passed down to UI code; the coordinated
/// operations ([`EditorStores::clear_selection`],
/// [`EditorStores::select_node`]) touch both the flowchart and canvas stores
/// within a single call so callers never observe one without the other having
/// been brought up to date.
#[derive(Debug, Default)]
pub struct EditorStores {
    /// The flowchart document being edited
    pub flowchart: Store<FlowchartData>,
    /// Transient drag interaction state
    pub drag: Store<DragState>,
    /// Grid configuration
    pub grid: Store<GridSettings>,
    /// Canvas navigation and selection state
    pub canvas: Store<CanvasState>,
}

impl EditorStores {
    /// Creates stores with default-initialized state documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the end of the node sequence.
    ///
    /// The caller must supply an id not already present in the document; the
    /// store does not check. If a duplicate is added anyway, id lookups
    /// resolve to the first match.
    pub fn add_node(&mut self, node: FlowchartNode) {
        log::debug!("add_node: {} ({:?})", node.id, node.node_type);
        self.flowchart.update(|data| {
            let mut data = data.clone();
            data.nodes.push(node);
            data
        });
    }

    /// Merges `update` over the node with the given id.
    ///
    /// Other nodes are unchanged and order is preserved. Silent no-op if no
    /// node matches.
    pub fn update_node(&mut self, node_id: &str, update: NodeUpdate) {
        log::debug!("update_node: {}", node_id);
        self.flowchart.update(|data| {
            let mut data = data.clone();
            for node in &mut data.nodes {
                if node.id == node_id {
                    update.apply(node);
                }
            }
            data
        });
    }

    /// Removes the node with the given id, cascading to its connections.
    ///
    /// Every connection whose source or destination is the removed node is
    /// removed as well. Silent no-op if no node matches.
    pub fn remove_node(&mut self, node_id: &str) {
        log::debug!("remove_node: {}", node_id);
        self.flowchart.update(|data| FlowchartData {
            nodes: data
                .nodes
                .iter()
                .filter(|node| node.id != node_id)
                .cloned()
                .collect(),
            connections: data
                .connections
                .iter()
                .filter(|conn| conn.from_node_id != node_id && conn.to_node_id != node_id)
                .cloned()
                .collect(),
        });
    }

    /// Appends a connection to the end of the connection sequence.
    ///
    /// The referenced node ids are not validated; a connection to a missing
    /// node is admitted and left for the caller to deal with.
    pub fn add_connection(&mut self, connection: Connection) {
        log::debug!(
            "add_connection: {} ({} -> {})",
            connection.id,
            connection.from_node_id,
            connection.to_node_id
        );
        self.flowchart.update(|data| {
            let mut data = data.clone();
            data.connections.push(connection);
            data
        });
    }

    /// Removes the connection with the given id. Silent no-op if absent.
    pub fn remove_connection(&mut self, connection_id: &str) {
        log::debug!("remove_connection: {}", connection_id);
        self.flowchart.update(|data| {
            let mut data = data.clone();
            data.connections.retain(|conn| conn.id != connection_id);
            data
        });
    }

    /// Deselects every node and empties the canvas selection sequence.
    pub fn clear_selection(&mut self) {
        log::debug!("clear_selection");
        self.flowchart.update(|data| {
            let mut data = data.clone();
            for node in &mut data.nodes {
                node.selected = false;
            }
            data
        });
        self.canvas.update(|state| {
            let mut state = state.clone();
            state.selection.clear();
            state
        });
    }

    /// Marks a node as selected.
    ///
    /// With `add_to_selection = false` the previous selection is fully
    /// cleared first and the selection sequence becomes exactly `[node_id]`.
    /// With `add_to_selection = true` the node is selected in addition to the
    /// current selection and its id is appended to the sequence; selecting
    /// the same id additively twice appends it twice.
    pub fn select_node(&mut self, node_id: &str, add_to_selection: bool) {
        log::debug!("select_node: {} (additive: {})", node_id, add_to_selection);
        if !add_to_selection {
            self.clear_selection();
        }

        self.flowchart.update(|data| {
            let mut data = data.clone();
            for node in &mut data.nodes {
                if node.id == node_id {
                    node.selected = true;
                }
            }
            data
        });

        let node_id = node_id.to_owned();
        self.canvas.update(move |state| {
            let mut state = state.clone();
            if add_to_selection {
                state.selection.push(node_id);
            } else {
                state.selection = vec![node_id];
            }
            state
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NodeType, Position};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn node(id: &str) -> FlowchartNode {
        FlowchartNode::new(id, NodeType::Process, Position::new(0.0, 0.0), id)
    }

    fn connection(id: &str, from: &str, to: &str) -> Connection {
        Connection::new(id, from, to, Position::default(), Position::default())
    }

    #[test]
    fn test_subscriber_receives_current_value_immediately() {
        let mut store = Store::new(7_i32);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = Rc::clone(&seen);
        store.subscribe(move |value| seen_clone.borrow_mut().push(*value));

        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn test_subscriber_receives_every_update_synchronously() {
        let mut store = Store::new(0_i32);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = Rc::clone(&seen);
        store.subscribe(move |value| seen_clone.borrow_mut().push(*value));

        store.update(|value| value + 1);
        store.set(10);
        store.update(|value| value * 2);

        assert_eq!(*seen.borrow(), vec![0, 1, 10, 20]);
    }

    #[test]
    fn test_subscribers_notified_in_subscription_order() {
        let mut store = Store::new(0_i32);
        let order = Rc::new(RefCell::new(Vec::new()));

        let order_a = Rc::clone(&order);
        store.subscribe(move |_| order_a.borrow_mut().push("a"));
        let order_b = Rc::clone(&order);
        store.subscribe(move |_| order_b.borrow_mut().push("b"));
        order.borrow_mut().clear();

        store.set(1);

        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = Store::new(0_i32);
        let count = Rc::new(RefCell::new(0));

        let count_clone = Rc::clone(&count);
        let id = store.subscribe(move |_| *count_clone.borrow_mut() += 1);
        assert_eq!(*count.borrow(), 1);

        assert!(store.unsubscribe(id));
        store.set(5);

        assert_eq!(*count.borrow(), 1);
        // Second unsubscribe with the same id is a no-op
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn test_add_node_appends_in_order() {
        let mut stores = EditorStores::new();

        stores.add_node(node("n1"));
        stores.add_node(node("n2"));

        let data = stores.flowchart.get();
        assert_eq!(data.nodes.len(), 2);
        assert_eq!(data.nodes[0].id, "n1");
        assert_eq!(data.nodes[1].id, "n2");
    }

    #[test]
    fn test_update_node_merges_and_preserves_order() {
        let mut stores = EditorStores::new();
        stores.add_node(node("n1"));
        stores.add_node(node("n2"));

        stores.update_node(
            "n1",
            NodeUpdate {
                text: Some("renamed".to_owned()),
                position: Some(Position::new(30.0, 40.0)),
                ..Default::default()
            },
        );

        let data = stores.flowchart.get();
        assert_eq!(data.nodes[0].id, "n1");
        assert_eq!(data.nodes[0].text, "renamed");
        assert_eq!(data.nodes[0].position, Position::new(30.0, 40.0));
        // n2 untouched, still second
        assert_eq!(data.nodes[1].id, "n2");
        assert_eq!(data.nodes[1].text, "n2");
    }

    #[test]
    fn test_update_node_unknown_id_is_noop() {
        let mut stores = EditorStores::new();
        stores.add_node(node("n1"));
        let before = stores.flowchart.get();

        stores.update_node(
            "missing",
            NodeUpdate {
                text: Some("x".to_owned()),
                ..Default::default()
            },
        );

        assert_eq!(stores.flowchart.get(), before);
    }

    #[test]
    fn test_remove_node_preserves_relative_order() {
        let mut stores = EditorStores::new();
        stores.add_node(node("n1"));
        stores.add_node(node("n2"));

        stores.remove_node("n1");

        let data = stores.flowchart.get();
        assert_eq!(data.nodes.len(), 1);
        assert_eq!(data.nodes[0].id, "n2");
    }

    #[test]
    fn test_remove_node_cascades_to_connections() {
        let mut stores = EditorStores::new();
        stores.add_node(node("n1"));
        stores.add_node(node("n2"));
        stores.add_node(node("n3"));
        stores.add_connection(connection("c1", "n1", "n2"));
        stores.add_connection(connection("c2", "n2", "n3"));
        stores.add_connection(connection("c3", "n1", "n3"));

        stores.remove_node("n2");

        let data = stores.flowchart.get();
        assert_eq!(data.connections.len(), 1);
        assert_eq!(data.connections[0].id, "c3");
        assert!(data
            .connections
            .iter()
            .all(|c| c.from_node_id != "n2" && c.to_node_id != "n2"));
    }

    #[test]
    fn test_remove_unknown_node_is_noop() {
        let mut stores = EditorStores::new();
        stores.add_node(node("n1"));
        let before = stores.flowchart.get();

        stores.remove_node("missing");

        assert_eq!(stores.flowchart.get(), before);
    }

    #[test]
    fn test_add_connection_does_not_validate_endpoints() {
        let mut stores = EditorStores::new();

        // Neither node exists; the connection is admitted anyway
        stores.add_connection(connection("c1", "ghost1", "ghost2"));

        assert_eq!(stores.flowchart.get().connections.len(), 1);
    }

    #[test]
    fn test_remove_connection_by_id() {
        let mut stores = EditorStores::new();
        stores.add_connection(connection("c1", "n1", "n2"));
        stores.add_connection(connection("c2", "n2", "n3"));

        stores.remove_connection("c1");

        let data = stores.flowchart.get();
        assert_eq!(data.connections.len(), 1);
        assert_eq!(data.connections[0].id, "c2");

        // Unknown id is a no-op
        stores.remove_connection("missing");
        assert_eq!(stores.flowchart.get().connections.len(), 1);
    }

    #[test]
    fn test_clear_selection_resets_both_stores() {
        let mut stores = EditorStores::new();
        stores.add_node(node("n1"));
        stores.add_node(node("n2"));
        stores.select_node("n1", false);
        stores.select_node("n2", true);

        stores.clear_selection();

        let data = stores.flowchart.get();
        assert!(data.nodes.iter().all(|n| !n.selected));
        assert!(stores.canvas.get().selection.is_empty());
    }

    #[test]
    fn test_select_node_replaces_selection() {
        let mut stores = EditorStores::new();
        stores.add_node(node("n1"));
        stores.add_node(node("n2"));

        stores.select_node("n1", false);
        stores.select_node("n2", false);

        let data = stores.flowchart.get();
        assert!(!data.nodes[0].selected);
        assert!(data.nodes[1].selected);
        assert_eq!(stores.canvas.get().selection, vec!["n2".to_owned()]);
    }

    #[test]
    fn test_select_node_additive_extends_selection() {
        let mut stores = EditorStores::new();
        stores.add_node(node("n1"));
        stores.add_node(node("n2"));

        stores.select_node("n1", false);
        stores.select_node("n2", true);

        let data = stores.flowchart.get();
        assert!(data.nodes[0].selected);
        assert!(data.nodes[1].selected);
        assert_eq!(
            stores.canvas.get().selection,
            vec!["n1".to_owned(), "n2".to_owned()]
        );
    }

    #[test]
    fn test_select_node_additive_admits_duplicates() {
        let mut stores = EditorStores::new();
        stores.add_node(node("n1"));

        stores.select_node("n1", true);
        stores.select_node("n1", true);

        assert_eq!(
            stores.canvas.get().selection,
            vec!["n1".to_owned(), "n1".to_owned()]
        );
    }

    #[test]
    fn test_mutations_publish_to_subscribers() {
        let mut stores = EditorStores::new();
        let node_counts = Rc::new(RefCell::new(Vec::new()));

        let counts = Rc::clone(&node_counts);
        stores
            .flowchart
            .subscribe(move |data| counts.borrow_mut().push(data.nodes.len()));

        stores.add_node(node("n1"));
        stores.add_node(node("n2"));
        stores.remove_node("n1");

        assert_eq!(*node_counts.borrow(), vec![0, 1, 2, 1]);
    }

    #[test]
    fn test_drag_and_grid_stores_replace_wholesale() {
        let mut stores = EditorStores::new();

        stores.drag.set(DragState {
            is_dragging: true,
            dragged_node_id: Some("n1".to_owned()),
            start_position: Position::new(5.0, 5.0),
            offset: Position::new(2.0, 3.0),
        });
        stores.grid.update(|grid| GridSettings {
            size: 40.0,
            ..*grid
        });

        assert!(stores.drag.get().is_dragging);
        assert_eq!(stores.drag.get().dragged_node_id.as_deref(), Some("n1"));
        assert_eq!(stores.grid.get().size, 40.0);
        assert!(stores.grid.get().enabled);
    }
}
