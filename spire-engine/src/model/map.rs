use serde::Serialize;
use serde_json::Value;

use super::{bit, Encode};
use crate::categories::MapSymbol;
use crate::errors::SpireResult;
use crate::limits::MAX_MAP_NODES;
use crate::raw;

/// One node of the act map. Links to neighbours are kept as opaque JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapNode {
    pub symbol: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub children: Vec<Value>,
    pub parents: Vec<Value>,
}

impl MapNode {
    pub fn from_json(data: &Value) -> Self {
        Self {
            symbol: raw::string(data, "symbol"),
            x: raw::opt_num(data, "x"),
            y: raw::opt_num(data, "y"),
            children: raw::list(data, "children").to_vec(),
            parents: raw::list(data, "parents").to_vec(),
        }
    }

    pub fn map_symbol(&self) -> Option<MapSymbol> {
        self.symbol.as_deref().and_then(MapSymbol::from_glyph)
    }
}

/// The act map, cut to its first [`MAX_MAP_NODES`] nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Map {
    pub nodes: Vec<MapNode>,
}

impl Map {
    /// Build from the `map` value itself, which is a list of nodes.
    pub fn from_json(data: &Value) -> Self {
        let nodes = data.as_array().map_or(&[][..], Vec::as_slice);
        Self {
            nodes: super::bounded(nodes, MAX_MAP_NODES, MapNode::from_json),
        }
    }

    /// Node counts per known symbol; other symbols are skipped.
    pub fn symbol_histogram(&self) -> [u32; MapSymbol::COUNT] {
        let mut counts = [0u32; MapSymbol::COUNT];
        for sym in self.nodes.iter().filter_map(MapNode::map_symbol) {
            counts[sym.index()] += 1;
        }
        counts
    }

    pub fn at_capacity(&self) -> bool {
        self.nodes.len() >= MAX_MAP_NODES
    }

    /// The kept nodes as a JSON list.
    pub fn to_json(&self) -> SpireResult<Value> {
        Ok(serde_json::to_value(&self.nodes)?)
    }
}

impl Encode for Map {
    /// node count, cap reached, then one count per [`MapSymbol`].
    const WIDTH: usize = 2 + MapSymbol::COUNT;

    fn encode_into(&self, out: &mut [f32]) {
        assert_eq!(out.len(), Self::WIDTH, "map summary width mismatch");
        out[0] = self.nodes.len() as f32;
        out[1] = bit(self.at_capacity());
        for (dst, n) in out[2..].iter_mut().zip(self.symbol_histogram()) {
            *dst = n as f32;
        }
    }
}
