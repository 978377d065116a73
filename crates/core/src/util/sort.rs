//! Natural ordering for collected paths

use std::cmp::Ordering;
use std::path::Path;

/// Compare paths component by component with natural ordering, so that
/// `q2/page.tsx` sorts before `q10/page.tsx`.
///
/// At the first differing component a directory sorts before a file, which
/// keeps each subtree together the way a file manager shows it.
pub fn compare_paths<P: AsRef<Path>>(a: P, b: P) -> Ordering {
    let a: Vec<_> = a.as_ref().components().collect();
    let b: Vec<_> = b.as_ref().components().collect();

    for (i, (ca, cb)) in a.iter().zip(b.iter()).enumerate() {
        if ca == cb {
            continue;
        }

        let a_is_file = i == a.len() - 1;
        let b_is_file = i == b.len() - 1;
        return match (a_is_file, b_is_file) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => natord::compare(
                &ca.as_os_str().to_string_lossy(),
                &cb.as_os_str().to_string_lossy(),
            ),
        };
    }

    a.len().cmp(&b.len())
}
