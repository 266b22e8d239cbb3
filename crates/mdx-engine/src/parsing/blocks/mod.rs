//! # Block Parsing
//!
//! A single-pass, line-oriented state machine.
//!
//! ## Parsing Model
//!
//! The `Scanner` owns the cursor, an explicit `ScanState`
//! (`Default | InBlockquote | InFencedCode | InIndentedCode`), the open
//! buffers (`OpenBlocks`) and the committed `Output`. In `Default` state the
//! line at the cursor is offered to each `BlockRule` in fixed priority order
//! and the first match consumes it.
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`, `BlockKind`, `BlockChildren` and the raw child items
//! - **`kinds`**: Block-specific types owning their delimiters and rendering
//! - **`buffers`**: `OpenBlocks` flush operations and the `Output` sequence
//! - **`scanner`**: `Scanner`, `ScanState` and the `BlockRule` table
//! - **`html`**: tag and escaping helpers
//!
//! ## Key Invariants
//!
//! - Code blocks are raw zones: content is escaped, never inline-rendered
//! - At most one of paragraph, blockquote and code block is open at a time
//! - Output is append-only except for setext promotion of the last paragraph

pub mod buffers;
pub mod html;
pub mod kinds;
pub mod scanner;
pub mod types;

pub use buffers::{OpenBlocks, Output};
pub use scanner::{BlockRule, ScanState, Scanner};
pub use types::{BlockChildren, BlockKind, BlockNode, Definition, ListItem};
