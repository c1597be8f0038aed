use crate::components::common::{DisplayOptions, Msg};
use crate::components::data_table::{CellTone, DataTable, TableCell};
use portfolio::format::format_quantity;
use portfolio::model::{AccentColor, Transaction, TransactionKind};
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

const HEADERS: [&str; 5] = ["Time", "Type", "Amount", "Price", "Total"];
const WIDTHS: [u16; 5] = [13, 8, 16, 12, 13];

#[derive(MockComponent)]
pub struct TransactionList {
    component: DataTable,
}

impl TransactionList {
    pub fn new(transactions: &[Transaction], options: DisplayOptions) -> Self {
        let rows = transactions
            .iter()
            .map(|transaction| Self::row(transaction, &options))
            .collect();

        Self {
            component: DataTable::new("Recent Transactions", &HEADERS, &WIDTHS, rows)
                .with_empty_message("No transactions"),
        }
    }

    fn kind_tone(kind: TransactionKind) -> CellTone {
        match kind {
            TransactionKind::Buy => CellTone::Accent(AccentColor::Green),
            TransactionKind::Sell => CellTone::Accent(AccentColor::Red),
            TransactionKind::Deposit => CellTone::Accent(AccentColor::Blue),
            TransactionKind::Withdraw => CellTone::Accent(AccentColor::Orange),
        }
    }

    fn row(transaction: &Transaction, options: &DisplayOptions) -> Vec<TableCell> {
        let total = transaction.signed_total();
        vec![
            TableCell::muted(transaction.formatted_time()),
            TableCell::new(transaction.kind.to_string(), Self::kind_tone(transaction.kind)).bold(),
            TableCell::primary(format_quantity(transaction.amount, &transaction.symbol)),
            TableCell::new(options.money(transaction.price), CellTone::Secondary),
            TableCell::new(options.signed_money(total), CellTone::signed(total)),
        ]
    }
}

impl Component<Msg, NoUserEvent> for TransactionList {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        self.component.handle_navigation(&ev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio::datasets::REFERENCE_TIMESTAMP;

    #[test]
    fn test_withdrawal_is_an_outflow() {
        let transaction = Transaction {
            kind: TransactionKind::Withdraw,
            symbol: "LINK".to_string(),
            amount: 120.0,
            price: 17.4,
            timestamp: REFERENCE_TIMESTAMP,
        };

        let row = TransactionList::row(&transaction, &DisplayOptions::default());

        assert_eq!(row[0].text, "Jun 01, 12:00");
        assert_eq!(row[1].text, "Withdraw");
        assert_eq!(row[2].text, "120.00 LINK");
        assert_eq!(row[4].text, "-$2,088.00");
        assert_eq!(row[4].tone, CellTone::signed(-1.0));
    }
}
