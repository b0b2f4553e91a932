mod errors;
mod node;
mod node_id;
mod seq_list;
mod util;

pub use errors::{Result, SeqListError};
pub use seq_list::{IntoIter, Iter, SeqList};
pub use util::swap;

/// Builds a [`SeqList`] from an ordered list of values, head first.
///
/// ```
/// use seqlist::seq;
///
/// let words = seq!["Hello", "linked", "list"];
/// assert_eq!(words.len(), 3);
/// assert_eq!(words.front(), Some(&"Hello"));
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::SeqList::new()
    };
    ($($elem:expr),+ $(,)?) => {{
        let mut list = $crate::SeqList::new();
        $(list.push_back($elem);)+
        list
    }};
}
