use crate::model::graph::NodeId;
use kdam::tqdm;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Display;

/// policy for choosing which connected components of a graph to retain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ComponentFilter {
    /// retain only the largest component
    #[default]
    Largest,
    /// retain the k largest components
    TopK { k: usize },
    /// retain the k smallest components
    LeastK { k: usize },
    /// retain every component
    KeepAll,
}

impl ComponentFilter {
    /// applies this filter to a component listing, returning the retained
    /// components in their original enumeration order. size ties prefer the
    /// earlier-enumerated component.
    pub fn assign_components(&self, components: Vec<HashSet<NodeId>>) -> Vec<HashSet<NodeId>> {
        use ComponentFilter as CF;
        let k = match self {
            CF::Largest => 1,
            CF::TopK { k } | CF::LeastK { k } => *k,
            CF::KeepAll => return components,
        };

        // bounded heap of the k components to retain. the heap top is the
        // next candidate for eviction under this filter's ordering.
        let mut queue: BinaryHeap<FilterQueueElement> = BinaryHeap::with_capacity(k + 1);
        let iter = tqdm!(
            components.iter().enumerate(),
            total = components.len(),
            desc = format!("assign components using '{}' filter", self)
        );
        for (index, component) in iter {
            let element = match self {
                CF::LeastK { .. } => FilterQueueElement::smallest(index, component),
                _ => FilterQueueElement::largest(index, component),
            };
            queue.push(element);
            if queue.len() > k {
                let _ = queue.pop();
            }
        }

        let keep_indices: HashSet<usize> = queue.iter().map(|element| element.index).collect();
        components
            .into_iter()
            .enumerate()
            .filter(|(index, _)| keep_indices.contains(index))
            .map(|(_, component)| component)
            .collect()
    }
}

impl Display for ComponentFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentFilter::Largest => write!(f, "largest"),
            ComponentFilter::TopK { k } => write!(f, "top_{}", k),
            ComponentFilter::LeastK { k } => write!(f, "least_{}", k),
            ComponentFilter::KeepAll => write!(f, "keep_all"),
        }
    }
}

/// queue entry ranking a component for eviction. `ord` is the component
/// size, negated when retaining the largest components so that the max-heap
/// top is always the weakest member of the retained set. ties evict the
/// later-enumerated component.
struct FilterQueueElement {
    index: usize,
    ord: i64,
}

impl FilterQueueElement {
    fn largest(index: usize, component: &HashSet<NodeId>) -> FilterQueueElement {
        FilterQueueElement {
            index,
            ord: -(component.len() as i64),
        }
    }

    fn smallest(index: usize, component: &HashSet<NodeId>) -> FilterQueueElement {
        FilterQueueElement {
            index,
            ord: component.len() as i64,
        }
    }
}

impl PartialEq for FilterQueueElement {
    fn eq(&self, other: &Self) -> bool {
        self.ord == other.ord && self.index == other.index
    }
}

impl Eq for FilterQueueElement {}

impl Ord for FilterQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ord
            .cmp(&other.ord)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for FilterQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
