//! Bidirectional cursors over ordered sequences, bounded or cycling.
//!
//! ```
//! use bicursor::{Cursor, CursorWithPosition, SequenceCursor};
//!
//! let mut cursor = SequenceCursor::cycling(vec![10, 20, 30]);
//! cursor.set_index(5).unwrap();
//! assert_eq!(cursor.current(), Some(&30));
//! assert_eq!(cursor.next(), Some(&10));
//! ```

pub use cursor::{Cursor, CursorWithPosition};
pub use error::CursorError;
pub use sequence::Sequence;
pub use sequence_cursor::SequenceCursor;

mod cursor;
mod error;
mod index;
mod sequence;
mod sequence_cursor;
