//! Immutable step (snapshot) representation for AlgoViz
//!
//! A [`Step`] is one recorded instant of an algorithm's visualized state:
//! shared metadata (description, highlighted source line, variable trace,
//! console output) plus exactly one [`Payload`]. Steps own all of their data;
//! no step aliases another, so a player may jump to any index in any order.
//!
//! # Wire Shape
//! Field names serialize in camelCase (`codeLine`, `visitedNodes`) and the
//! payload carries a single discriminant field `kind`. Matrix highlight keys
//! are `"row,col"` strings and variables keep their insertion order.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::algorithm::concept::ConceptState;
use crate::algorithm::traits::{NodeId, VisualizationKind};

/// One recorded instant of an algorithm run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Human-readable, locale-dependent narration
    pub description: String,

    /// 1-based line of the displayed source this step corresponds to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_line: Option<usize>,

    /// Named locals relevant to this instant, in declaration order
    #[serde(default)]
    pub variables: Variables,

    /// Accumulated console lines up to and including this step
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub console_output: Vec<String>,

    /// The visualization payload
    pub payload: Payload,
}

impl Step {
    pub fn array(&self) -> Option<&ArrayState> {
        match &self.payload {
            Payload::Array(state) => Some(state),
            _ => None,
        }
    }

    pub fn graph(&self) -> Option<&GraphState> {
        match &self.payload {
            Payload::Graph(state) => Some(state),
            _ => None,
        }
    }

    pub fn matrix(&self) -> Option<&MatrixState> {
        match &self.payload {
            Payload::Matrix(state) => Some(state),
            _ => None,
        }
    }

    pub fn concept(&self) -> Option<&ConceptState> {
        match &self.payload {
            Payload::Concept(state) => Some(state),
            _ => None,
        }
    }

    /// Copy of this step with the narration blanked out.
    ///
    /// Two runs in different locales must agree on everything this returns.
    pub fn structural(&self) -> Step {
        Step {
            description: String::new(),
            ..self.clone()
        }
    }
}

/// Tagged union of visualization payloads.
///
/// Adjacently tagged (`{"kind": ..., "state": ...}`) so that integer map keys
/// inside a payload survive deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "state", rename_all = "lowercase")]
pub enum Payload {
    Array(ArrayState),
    Graph(GraphState),
    Matrix(MatrixState),
    Concept(ConceptState),
}

impl Payload {
    pub fn kind(&self) -> VisualizationKind {
        match self {
            Payload::Array(_) => VisualizationKind::Array,
            Payload::Graph(_) => VisualizationKind::Graph,
            Payload::Matrix(_) => VisualizationKind::Matrix,
            Payload::Concept(_) => VisualizationKind::Concept,
        }
    }
}

impl From<ArrayState> for Payload {
    fn from(state: ArrayState) -> Self {
        Payload::Array(state)
    }
}

impl From<GraphState> for Payload {
    fn from(state: GraphState) -> Self {
        Payload::Graph(state)
    }
}

impl From<MatrixState> for Payload {
    fn from(state: MatrixState) -> Self {
        Payload::Matrix(state)
    }
}

impl From<ConceptState> for Payload {
    fn from(state: ConceptState) -> Self {
        Payload::Concept(state)
    }
}

/// Highlight vocabulary understood by the renderer.
///
/// Unknown strings deserialize to [`Highlight::Unknown`], which renders with
/// the default style.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    Comparing,
    Swapping,
    Sorted,
    Pivot,
    Current,
    Found,
    Visited,
    Active,
    Minimum,
    Range,
    Eliminated,
    Mid,
    Path,
    Wall,
    Start,
    Goal,
    Queen,
    Conflict,
    Placed,
    Computed,
    Dependency,
    Selected,
    #[serde(other)]
    Unknown,
}

impl Highlight {
    /// CSS class used by the renderer
    pub fn style_class(self) -> &'static str {
        match self {
            Highlight::Comparing => "hl-comparing",
            Highlight::Swapping => "hl-swapping",
            Highlight::Sorted => "hl-sorted",
            Highlight::Pivot => "hl-pivot",
            Highlight::Current => "hl-current",
            Highlight::Found => "hl-found",
            Highlight::Visited => "hl-visited",
            Highlight::Active => "hl-active",
            Highlight::Minimum => "hl-minimum",
            Highlight::Range => "hl-range",
            Highlight::Eliminated => "hl-eliminated",
            Highlight::Mid => "hl-mid",
            Highlight::Path => "hl-path",
            Highlight::Wall => "hl-wall",
            Highlight::Start => "hl-start",
            Highlight::Goal => "hl-goal",
            Highlight::Queen => "hl-queen",
            Highlight::Conflict => "hl-conflict",
            Highlight::Placed => "hl-placed",
            Highlight::Computed => "hl-computed",
            Highlight::Dependency => "hl-dependency",
            Highlight::Selected => "hl-selected",
            Highlight::Unknown => "default",
        }
    }

    /// Lenient parse for renderer-side data; never fails
    pub fn from_str_lossy(raw: &str) -> Self {
        serde_json::from_value(serde_json::Value::String(raw.to_owned()))
            .unwrap_or(Highlight::Unknown)
    }
}

/// Array payload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayState {
    pub array: Vec<i64>,

    /// Sparse index → highlight map
    #[serde(default)]
    pub highlights: BTreeMap<usize, Highlight>,

    /// Indices already in their final position
    #[serde(default)]
    pub sorted: BTreeSet<usize>,

    /// Secondary buffer (count array, merge buffer, digit buckets)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<AuxiliaryArray>,
}

impl ArrayState {
    pub fn new(array: Vec<i64>) -> Self {
        Self {
            array,
            ..Self::default()
        }
    }

    /// Copy of `array` with the given final-position set
    pub fn snapshot(array: &[i64], sorted: &BTreeSet<usize>) -> Self {
        Self {
            array: array.to_vec(),
            sorted: sorted.clone(),
            ..Self::default()
        }
    }

    pub fn highlight(mut self, index: usize, kind: Highlight) -> Self {
        self.highlights.insert(index, kind);
        self
    }

    /// Highlight every index in `range`
    pub fn highlight_range(mut self, range: std::ops::RangeInclusive<usize>, kind: Highlight) -> Self {
        for index in range {
            self.highlights.insert(index, kind);
        }
        self
    }

    pub fn with_sorted<I: IntoIterator<Item = usize>>(mut self, indices: I) -> Self {
        self.sorted.extend(indices);
        self
    }

    pub fn with_auxiliary(mut self, auxiliary: AuxiliaryArray) -> Self {
        self.auxiliary = Some(auxiliary);
        self
    }

    pub fn is_sorted_ascending(&self) -> bool {
        self.array.windows(2).all(|w| w[0] <= w[1])
    }
}

/// Labeled secondary array drawn under the main one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuxiliaryArray {
    pub label: String,
    pub values: Vec<i64>,
    #[serde(default)]
    pub highlights: BTreeMap<usize, Highlight>,
}

impl AuxiliaryArray {
    pub fn new(label: &str, values: Vec<i64>) -> Self {
        Self {
            label: label.to_owned(),
            values,
            highlights: BTreeMap::new(),
        }
    }

    pub fn highlight(mut self, index: usize, kind: Highlight) -> Self {
        self.highlights.insert(index, kind);
        self
    }
}

/// Graph node with fixed layout position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Graph edge; undirected unless the runner says otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// Unordered node pair with canonical (smaller id first) ordering
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EdgePair(pub NodeId, pub NodeId);

impl EdgePair {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        // Ensure canonical ordering for undirected edges
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.0 == node || self.1 == node
    }
}

/// Tentative or final distance of a node
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Distance {
    Finite(u32),
    Infinite,
}

impl Distance {
    pub fn finite(self) -> Option<u32> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Infinite => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{}", value),
            Distance::Infinite => f.write_str("∞"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(value) => serializer.serialize_u32(*value),
            Distance::Infinite => serializer.serialize_str("∞"),
        }
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DistanceVisitor;

        impl<'de> Visitor<'de> for DistanceVisitor {
            type Value = Distance;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or \"∞\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Distance, E> {
                u32::try_from(value)
                    .map(Distance::Finite)
                    .map_err(|_| E::custom("distance out of range"))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Distance, E> {
                match value {
                    "∞" | "inf" | "Infinity" => Ok(Distance::Infinite),
                    other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
                }
            }
        }

        deserializer.deserialize_any(DistanceVisitor)
    }
}

/// Graph payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphState {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,

    /// Visit order
    pub visited_nodes: Vec<NodeId>,
    pub current_node: Option<NodeId>,
    pub visited_edges: BTreeSet<EdgePair>,
    pub current_edge: Option<EdgePair>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<Vec<NodeId>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<Vec<NodeId>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distances: Option<BTreeMap<NodeId, Distance>>,
}

impl GraphState {
    /// Fresh traversal state over a fixed topology
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self {
            nodes,
            edges,
            visited_nodes: Vec::new(),
            current_node: None,
            visited_edges: BTreeSet::new(),
            current_edge: None,
            queue: None,
            stack: None,
            distances: None,
        }
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    pub fn has_edge(&self, pair: EdgePair) -> bool {
        self.edges
            .iter()
            .any(|edge| EdgePair::new(edge.from, edge.to) == pair)
    }
}

/// Matrix coordinate; serializes as the `"row,col"` string key
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellKey {
    pub row: usize,
    pub col: usize,
}

impl CellKey {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for CellKey {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (row, col) = raw
            .split_once(',')
            .ok_or_else(|| format!("cell key without comma: {raw}"))?;
        let row = row.trim().parse().map_err(|_| format!("bad row in {raw}"))?;
        let col = col.trim().parse().map_err(|_| format!("bad col in {raw}"))?;
        Ok(Self { row, col })
    }
}

impl Serialize for CellKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CellKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Matrix cell contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(i64),
    Text(String),
    Empty,
}

impl CellValue {
    pub fn text(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value)
    }
}

/// Matrix / grid payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixState {
    pub rows: usize,
    pub cols: usize,
    pub values: Vec<Vec<CellValue>>,
    #[serde(default)]
    pub highlights: BTreeMap<CellKey, Highlight>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_labels: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_labels: Option<Vec<String>>,
}

impl MatrixState {
    /// Grid of empty cells
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self::from_values(vec![vec![CellValue::Empty; cols]; rows])
    }

    /// Grid from row-major values; `cols` is taken from the first row
    pub fn from_values(values: Vec<Vec<CellValue>>) -> Self {
        let rows = values.len();
        let cols = values.first().map_or(0, Vec::len);
        Self {
            rows,
            cols,
            values,
            highlights: BTreeMap::new(),
            row_labels: None,
            col_labels: None,
        }
    }

    pub fn with_labels(mut self, row_labels: Vec<String>, col_labels: Vec<String>) -> Self {
        self.row_labels = Some(row_labels);
        self.col_labels = Some(col_labels);
        self
    }

    pub fn highlight(mut self, row: usize, col: usize, kind: Highlight) -> Self {
        self.highlights.insert(CellKey::new(row, col), kind);
        self
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.values.get(row).and_then(|r| r.get(col))
    }

    pub fn in_bounds(&self, key: CellKey) -> bool {
        key.row < self.rows && key.col < self.cols
    }
}

/// Scalar shown in the variables panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{}", value),
            Scalar::Int(value) => write!(f, "{}", value),
            Scalar::Float(value) => write!(f, "{:.2}", value),
            Scalar::Text(value) => f.write_str(value),
            Scalar::Null => f.write_str("null"),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<u8> for Scalar {
    fn from(value: u8) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Scalar::Float(value as f64), Scalar::Int)
    }
}

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Scalar::Float(value as f64), Scalar::Int)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<char> for Scalar {
    fn from(value: char) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<Distance> for Scalar {
    fn from(value: Distance) -> Self {
        match value {
            Distance::Finite(d) => Scalar::Int(i64::from(d)),
            Distance::Infinite => Scalar::Text("∞".to_owned()),
        }
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Null, Into::into)
    }
}

/// Insertion-ordered name → scalar mapping
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Variables(Vec<(String, Scalar)>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name`, keeping its original position if already present
    pub fn set(&mut self, name: &str, value: impl Into<Scalar>) {
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name.to_owned(), value)),
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<Scalar>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Variables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Variables {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VariablesVisitor;

        impl<'de> Visitor<'de> for VariablesVisitor {
            type Value = Variables;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of variable names to scalars")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Variables, A::Error> {
                let mut variables = Variables::new();
                while let Some((name, value)) = access.next_entry::<String, Scalar>()? {
                    variables.set(&name, value);
                }
                Ok(variables)
            }
        }

        deserializer.deserialize_map(VariablesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_key_serializes_as_row_col() {
        let matrix = MatrixState::empty(2, 3).highlight(1, 2, Highlight::Queen);
        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(json["highlights"]["1,2"], "queen");

        let back: MatrixState = serde_json::from_value(json).unwrap();
        assert_eq!(back.highlights.get(&CellKey::new(1, 2)), Some(&Highlight::Queen));
    }

    #[test]
    fn test_unknown_highlight_degrades_to_default() {
        let kind: Highlight = serde_json::from_str("\"sparkle\"").unwrap();
        assert_eq!(kind, Highlight::Unknown);
        assert_eq!(kind.style_class(), "default");
        assert_eq!(Highlight::from_str_lossy("found"), Highlight::Found);
        assert_eq!(Highlight::from_str_lossy("nope"), Highlight::Unknown);
    }

    #[test]
    fn test_small_unsigned_values_become_ints() {
        let digit: u8 = 3;
        let vars = Variables::new().with("digit", digit);
        assert_eq!(vars.get("digit"), Some(&Scalar::Int(3)));
        assert_eq!(Scalar::from(u8::MAX), Scalar::Int(255));
    }

    #[test]
    fn test_variables_keep_insertion_order() {
        let mut vars = Variables::new().with("row", 2usize).with("col", 1usize);
        vars.set("isSafe", true);
        vars.set("row", 3usize);

        let names: Vec<&str> = vars.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["row", "col", "isSafe"]);
        assert_eq!(vars.get("row"), Some(&Scalar::Int(3)));

        let json = serde_json::to_string(&vars).unwrap();
        assert_eq!(json, r#"{"row":3,"col":1,"isSafe":true}"#);
    }

    #[test]
    fn test_distance_wire_shape() {
        assert_eq!(serde_json::to_string(&Distance::Finite(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&Distance::Infinite).unwrap(), "\"∞\"");
        let parsed: Distance = serde_json::from_str("\"∞\"").unwrap();
        assert_eq!(parsed, Distance::Infinite);
        assert!(Distance::Finite(u32::MAX) < Distance::Infinite);
    }

    #[test]
    fn test_step_payload_discriminant() {
        let step = Step {
            description: "start".to_owned(),
            code_line: Some(1),
            variables: Variables::new().with("i", 0usize),
            console_output: Vec::new(),
            payload: Payload::Array(ArrayState::new(vec![3, 1]).highlight(0, Highlight::Comparing)),
        };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["payload"]["kind"], "array");
        assert_eq!(json["codeLine"], 1);
        assert!(json.get("consoleOutput").is_none());

        let back: Step = serde_json::from_value(json).unwrap();
        assert_eq!(back, step);
    }

    #[test]
    fn test_edge_pair_is_unordered() {
        assert_eq!(EdgePair::new(NodeId(4), NodeId(1)), EdgePair::new(NodeId(1), NodeId(4)));
        assert!(EdgePair::new(NodeId(4), NodeId(1)).touches(NodeId(4)));
    }
}
