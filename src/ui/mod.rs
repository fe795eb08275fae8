/// UI layer: panels for the selection controls, renderers for the grids
/// and charts. Renderers are pure over `&AppState`; only the side panel
/// mutates selections.
pub mod charts;
pub mod dashboard;
pub mod panels;
pub mod pie;
pub mod table;
