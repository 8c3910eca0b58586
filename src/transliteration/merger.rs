//! Diff-based merge of edited sequences
//!
//! An edit script (keep, delete, insert) is computed over the keys of the old and new
//! sequence. Kept entries are taken from the old sequence, so their annotations survive.
//! An inserted entry is merged with the oldest deleted entry not yet merged, which lets
//! lightly edited words carry their lemma and alignment over, even when the edit moved
//! them past a kept entry.

use std::collections::VecDeque;

use similar::{capture_diff_slices, Algorithm, DiffOp};

use super::annotation::AlignmentMap;
use super::tokens::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Keep,
    Delete,
    Insert,
}

/// Keep/delete/insert script turning `old` into `new`
///
/// Inside a replaced block the inserts come first when the new block is shorter, the
/// deletes first otherwise.
pub fn edit_script(old: &[String], new: &[String]) -> Vec<Edit> {
    let mut script = Vec::with_capacity(old.len().max(new.len()));
    let mut deleted = 0;
    let mut inserted = 0;

    fn flush(script: &mut Vec<Edit>, deleted: &mut usize, inserted: &mut usize) {
        let deletes = std::iter::repeat(Edit::Delete).take(*deleted);
        let inserts = std::iter::repeat(Edit::Insert).take(*inserted);
        if *inserted < *deleted {
            script.extend(inserts.chain(deletes));
        } else {
            script.extend(deletes.chain(inserts));
        }
        *deleted = 0;
        *inserted = 0;
    }

    for op in capture_diff_slices(Algorithm::Myers, old, new) {
        match op {
            DiffOp::Equal { len, .. } => {
                flush(&mut script, &mut deleted, &mut inserted);
                script.extend(std::iter::repeat(Edit::Keep).take(len));
            }
            DiffOp::Delete { old_len, .. } => deleted += old_len,
            DiffOp::Insert { new_len, .. } => inserted += new_len,
            DiffOp::Replace {
                old_len, new_len, ..
            } => {
                deleted += old_len;
                inserted += new_len;
            }
        }
    }
    flush(&mut script, &mut deleted, &mut inserted);
    script
}

/// Merge two sequences matched by `key`, combining edited entries with `inner_merge`
pub fn merge_by<T, K, M>(old: &[T], new: &[T], key: K, inner_merge: M) -> Vec<T>
where
    T: Clone,
    K: Fn(&T) -> String,
    M: Fn(&T, &T) -> T,
{
    let old_keys: Vec<String> = old.iter().map(&key).collect();
    let new_keys: Vec<String> = new.iter().map(&key).collect();

    let mut old_entries = old.iter();
    let mut new_entries = new.iter();
    let mut edited: VecDeque<&T> = VecDeque::new();
    let mut result = Vec::with_capacity(new.len());

    for edit in edit_script(&old_keys, &new_keys) {
        match edit {
            Edit::Keep => {
                if let (Some(old_entry), Some(_)) = (old_entries.next(), new_entries.next()) {
                    result.push(old_entry.clone());
                }
            }
            Edit::Delete => edited.extend(old_entries.next()),
            Edit::Insert => {
                if let Some(new_entry) = new_entries.next() {
                    let entry = match edited.pop_front() {
                        Some(previous) => inner_merge(previous, new_entry),
                        None => new_entry.clone(),
                    };
                    result.push(entry);
                }
            }
        }
    }
    result
}

/// Merge token sequences by token key
pub fn merge_tokens(old: &[Token], new: &[Token]) -> Vec<Token> {
    merge_by(old, new, Token::key, Token::merge)
}

/// Where each old token ended up in the new sequence, compared by value
///
/// Deleted tokens map to `None` unless a word-like token is inserted in their place
/// before the next kept token.
pub fn create_alignment_map(old: &[Token], new: &[Token]) -> AlignmentMap {
    let old_values: Vec<String> = old.iter().map(Token::value).collect();
    let new_values: Vec<String> = new.iter().map(Token::value).collect();

    let mut alignment_map: AlignmentMap = Vec::with_capacity(old.len());
    let mut pending: VecDeque<usize> = VecDeque::new();
    let mut new_index = 0;

    for edit in edit_script(&old_values, &new_values) {
        match edit {
            Edit::Keep => {
                alignment_map.push(Some(new_index));
                new_index += 1;
                pending.clear();
            }
            Edit::Delete => {
                pending.push_back(alignment_map.len());
                alignment_map.push(None);
            }
            Edit::Insert => {
                if let Some(slot) = pending.pop_front() {
                    if new.get(new_index).is_some_and(Token::is_word_like) {
                        alignment_map[slot] = Some(new_index);
                    }
                }
                new_index += 1;
            }
        }
    }
    alignment_map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(values: &[&str]) -> Vec<Token> {
        values
            .iter()
            .map(|value| Token::word(vec![Token::reading(value, Some(1))]))
            .collect()
    }

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_edit_script_orders_replacements() {
        use Edit::*;
        assert_eq!(
            edit_script(&keys(&["a", "b", "c", "d"]), &keys(&["e", "d"])),
            vec![Insert, Delete, Delete, Delete, Keep]
        );
        assert_eq!(
            edit_script(&keys(&["a"]), &keys(&["b", "c"])),
            vec![Delete, Insert, Insert]
        );
    }

    #[test]
    fn test_alignment_map_examples() {
        assert_eq!(create_alignment_map(&words(&["kur"]), &words(&["kur"])), vec![Some(0)]);
        assert_eq!(create_alignment_map(&words(&["kur"]), &[]), vec![None]);
        assert_eq!(create_alignment_map(&[], &words(&["kur"])), Vec::<Option<usize>>::new());
        assert_eq!(
            create_alignment_map(&words(&["kur", "ra"]), &words(&["kur", "pa", "ra"])),
            vec![Some(0), Some(2)]
        );
        assert_eq!(
            create_alignment_map(&words(&["a", "b", "c", "d"]), &words(&["e", "d"])),
            vec![None, None, None, Some(1)]
        );
    }

    #[test]
    fn test_replaced_word_takes_the_slot() {
        assert_eq!(
            create_alignment_map(&words(&["kur", "ra"]), &words(&["kur", "pa"])),
            vec![Some(0), Some(1)]
        );
        let divider = vec![Token::divider("|")];
        assert_eq!(create_alignment_map(&words(&["ra"]), &divider), vec![None]);
    }

    #[test]
    fn test_merge_by_combines_edited_entries() {
        let old = vec!["a1".to_string(), "b1".to_string(), "c1".to_string()];
        let new = vec!["a2".to_string(), "x2".to_string(), "c2".to_string()];
        let merged = merge_by(
            &old,
            &new,
            |entry| entry[..1].to_string(),
            |old, new| format!("{}+{}", old, new),
        );
        assert_eq!(merged, vec!["a1", "b1+x2", "c1"]);
    }

    #[test]
    fn test_deleted_entries_survive_a_keep() {
        let old = vec!["a1".to_string(), "b1".to_string(), "c1".to_string()];
        let new = vec!["a2".to_string(), "c2".to_string(), "x2".to_string()];
        let merged = merge_by(
            &old,
            &new,
            |entry| entry[..1].to_string(),
            |old, new| format!("{}+{}", old, new),
        );
        assert_eq!(merged, vec!["a1", "c1", "b1+x2"]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let tokens = words(&["kur", "ra", "pa"]);
        assert_eq!(merge_tokens(&tokens, &tokens), tokens);
    }
}
