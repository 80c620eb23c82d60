use std::cmp::Ordering;
use std::fmt;

// frontier entry shared by all disciplines; the FIFO queue and the LIFO
// stack never consult the ordering, the binary heap does
#[derive(Debug)]
pub struct FrontierItem {
    pub(crate) priority: f64,
    // cost accumulated along the carried path up to `node`
    pub(crate) cost: f64,
    pub(crate) node: String,
    // path up to but not including `node`; the node is appended when popped
    pub(crate) path: Vec<String>,
}

impl fmt::Display for FrontierItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "node: {}, priority: {}, cost: {}", self.node, self.priority, self.cost)
    }
}

impl PartialEq for FrontierItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierItem {}

impl PartialOrd for FrontierItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierItem {
    // reversed so BinaryHeap pops the minimum; ties fall back to the node
    // code and then to the carried path, element by element, so equal
    // priorities always pop in the same order
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.path.cmp(&self.path))
    }
}
