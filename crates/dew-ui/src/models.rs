//! Shared UI models.

/// Short-lived confirmation shown by the toast host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
}

/// Append a toast with the next identifier.
pub fn push_toast(toasts: &mut Vec<Toast>, next_id: &mut u64, message: String) {
    *next_id += 1;
    toasts.push(Toast {
        id: *next_id,
        message,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_toast_assigns_increasing_ids() {
        let mut toasts = Vec::new();
        let mut next_id = 0;
        push_toast(&mut toasts, &mut next_id, "Removed 1 person".into());
        push_toast(&mut toasts, &mut next_id, "Removed 2 people".into());
        let ids: Vec<_> = toasts.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(toasts[1].message, "Removed 2 people");
    }
}
