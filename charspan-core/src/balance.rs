//! Parenthesis balance scan

/// Whether every `'('` in `s` is matched by a later `')'` and no `')'`
/// appears before its opener. Characters other than the two parentheses are
/// ignored; the empty string is balanced.
pub fn balanced_parentheses(s: &str) -> bool {
    let mut balance: i64 = 0;
    for c in s.chars() {
        match c {
            '(' => balance += 1,
            ')' => {
                balance -= 1;
                // A closer with no open counterpart can never recover.
                if balance < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    balance == 0
}
