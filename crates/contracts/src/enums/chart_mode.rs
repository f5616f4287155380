/// Способ отображения продаж на графике
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartMode {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartMode {
    /// Order of the mode switch buttons
    pub const ALL: [ChartMode; 3] = [ChartMode::Bar, ChartMode::Line, ChartMode::Pie];

    /// Получить подпись для кнопки
    pub fn display_name(&self) -> &'static str {
        match self {
            ChartMode::Bar => "Bar",
            ChartMode::Line => "Line",
            ChartMode::Pie => "Pie",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bar() {
        assert_eq!(ChartMode::default(), ChartMode::Bar);
        assert_eq!(ChartMode::ALL[0], ChartMode::default());
    }

    #[test]
    fn test_button_labels() {
        let labels: Vec<_> = ChartMode::ALL.iter().map(|m| m.display_name()).collect();
        assert_eq!(labels, vec!["Bar", "Line", "Pie"]);
    }
}
