// 撤銷/重做歷史管理

/// 單一編輯動作，位置以字元計
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert { pos: usize, text: String },
    Remove { pos: usize, text: String },
}

impl Edit {
    /// 反向動作（撤銷用）
    pub fn inverse(&self) -> Edit {
        match self {
            Edit::Insert { pos, text } => Edit::Remove {
                pos: *pos,
                text: text.clone(),
            },
            Edit::Remove { pos, text } => Edit::Insert {
                pos: *pos,
                text: text.clone(),
            },
        }
    }
}

pub struct History {
    undo_stack: Vec<Edit>,
    redo_stack: Vec<Edit>,
    max_size: usize,
}

impl History {
    pub fn new(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    pub fn record(&mut self, edit: Edit) {
        if self.undo_stack.len() >= self.max_size {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(edit);
        self.redo_stack.clear();
    }

    pub fn undo(&mut self) -> Option<Edit> {
        let edit = self.undo_stack.pop()?;
        self.redo_stack.push(edit.clone());
        Some(edit)
    }

    pub fn redo(&mut self) -> Option<Edit> {
        let edit = self.redo_stack.pop()?;
        self.undo_stack.push(edit.clone());
        Some(edit)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_limit() {
        let mut history = History::new(2);
        for pos in 0..3 {
            history.record(Edit::Insert {
                pos,
                text: "a".to_string(),
            });
        }

        let undone = history.undo().map(|edit| edit.inverse());
        assert_eq!(
            undone,
            Some(Edit::Remove {
                pos: 2,
                text: "a".to_string()
            })
        );
        assert!(history.undo().is_some());
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::default();
        history.record(Edit::Insert {
            pos: 0,
            text: "x".to_string(),
        });
        history.undo();
        history.record(Edit::Insert {
            pos: 0,
            text: "y".to_string(),
        });
        assert!(history.redo().is_none());
        assert!(history.undo().is_some());
        assert!(history.undo().is_none());
    }
}
