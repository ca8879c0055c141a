//! InvestmentEngine (L1): contribution → withdrawal → growth, in that
//! order, for a single account in a single month (§4.4).

use rust_decimal::Decimal;

use crate::calendar::Month;
use crate::currency;
use crate::model::{Investment, InvestmentState};

/// Net effect of one month's contribution/withdrawal/growth cycle on the
/// owning scenario's liquid balance and cost/income ledgers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InvestmentMonthEffect {
    /// Signed effect on the scenario's liquid balance this month.
    pub cash_delta: Decimal,
    pub income: Decimal,
    pub costs: Decimal,
}

/// Advance `state` by one month and report the cash-flow side effects.
pub fn apply_month(investment: &Investment, state: &mut InvestmentState, month: Month) -> InvestmentMonthEffect {
    let mut effect = InvestmentMonthEffect::default();

    // 1. Contribution.
    let contribution: Decimal = investment
        .contributions
        .iter()
        .map(|e| e.amount_at(month))
        .sum();
    if currency::is_positive(contribution) {
        state.current_balance += contribution;
        state.principal_basis += contribution;
        if investment.contributions_from_cash {
            effect.cash_delta -= contribution;
            effect.costs += contribution;
        }
    }

    // 2. Withdrawal — either amount-based or percentage-based, never both
    // (enforced at config-prepare time).
    let amount_withdrawal: Decimal = investment
        .withdrawals
        .iter()
        .filter(|e| !e.is_percentage())
        .map(|e| e.amount_at(month))
        .sum();
    let percentage_withdrawal: Decimal = investment
        .withdrawals
        .iter()
        .filter(|e| e.is_percentage())
        .map(|e| e.percentage_at(month))
        .sum();
    let requested_withdrawal = if currency::is_positive(percentage_withdrawal) {
        state.current_balance * percentage_withdrawal / Decimal::from(100)
    } else {
        amount_withdrawal
    };
    let withdrawn = requested_withdrawal.min(state.current_balance).max(Decimal::ZERO);

    if currency::is_positive(withdrawn) {
        let growth_portion = withdrawn.min(state.accrued_growth().max(Decimal::ZERO));
        let principal_portion = withdrawn - growth_portion;
        let tax = if currency::is_positive(investment.withdrawal_tax_rate) {
            growth_portion * investment.withdrawal_tax_rate / Decimal::from(100)
        } else {
            Decimal::ZERO
        };
        let net_credit = withdrawn - tax;

        state.current_balance -= withdrawn;
        state.principal_basis -= principal_portion;
        effect.cash_delta += net_credit;
        effect.income += net_credit;
    }

    // 3. Growth, compounded on the post-transaction balance.
    let pre_growth = state.current_balance;
    state.current_balance *= Decimal::ONE + investment.annual_return_rate / Decimal::from(1200);
    if state.current_balance > pre_growth && currency::is_positive(investment.tax_rate) {
        let tax = (state.current_balance - pre_growth) * investment.tax_rate / Decimal::from(100);
        effect.cash_delta -= tax;
        effect.costs += tax;
    }

    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Event;
    use rust_decimal_macros::dec;

    fn m(label: &str) -> Month {
        Month::parse(label).unwrap()
    }

    #[test]
    fn scenario_f_percentage_withdrawal() {
        let mut withdrawal = Event::new("1pct", Decimal::ZERO);
        withdrawal.percentage = Some(dec!(1));
        withdrawal.occurrences = vec![m("2025-02")];

        let investment = Investment {
            name: "brokerage".into(),
            starting_value: dec!(10000),
            annual_return_rate: dec!(12),
            tax_rate: Decimal::ZERO,
            withdrawal_tax_rate: Decimal::ZERO,
            contributions_from_cash: false,
            contributions: vec![],
            withdrawals: vec![withdrawal],
        };
        let mut state = InvestmentState::new(investment.starting_value);

        let jan = apply_month(&investment, &mut state, m("2025-01"));
        assert_eq!(currency::round(state.current_balance), dec!(10100.00));
        assert_eq!(jan.cash_delta, Decimal::ZERO);

        let feb = apply_month(&investment, &mut state, m("2025-02"));
        assert_eq!(currency::round(feb.cash_delta), dec!(101.00));
        assert_eq!(currency::round(state.current_balance), dec!(10098.99));
    }

    #[test]
    fn withdrawal_caps_at_current_balance() {
        let mut withdrawal = Event::new("big", dec!(999_999));
        withdrawal.occurrences = vec![m("2025-01")];
        let investment = Investment {
            name: "small".into(),
            starting_value: dec!(100),
            annual_return_rate: Decimal::ZERO,
            tax_rate: Decimal::ZERO,
            withdrawal_tax_rate: Decimal::ZERO,
            contributions_from_cash: false,
            contributions: vec![],
            withdrawals: vec![withdrawal],
        };
        let mut state = InvestmentState::new(investment.starting_value);
        let effect = apply_month(&investment, &mut state, m("2025-01"));
        assert_eq!(effect.cash_delta, dec!(100));
        assert_eq!(state.current_balance, Decimal::ZERO);
    }

    #[test]
    fn contribution_from_cash_debits_scenario_balance() {
        let mut contribution = Event::new("401k", dec!(500));
        contribution.occurrences = vec![m("2025-01")];
        let investment = Investment {
            name: "401k".into(),
            starting_value: Decimal::ZERO,
            annual_return_rate: Decimal::ZERO,
            tax_rate: Decimal::ZERO,
            withdrawal_tax_rate: Decimal::ZERO,
            contributions_from_cash: true,
            contributions: vec![contribution],
            withdrawals: vec![],
        };
        let mut state = InvestmentState::new(investment.starting_value);
        let effect = apply_month(&investment, &mut state, m("2025-01"));
        assert_eq!(effect.cash_delta, dec!(-500));
        assert_eq!(effect.costs, dec!(500));
        assert_eq!(state.current_balance, dec!(500));
    }

    #[test]
    fn taxable_growth_debits_liquid_balance() {
        let investment = Investment {
            name: "taxable".into(),
            starting_value: dec!(10000),
            annual_return_rate: dec!(12),
            tax_rate: dec!(20),
            withdrawal_tax_rate: Decimal::ZERO,
            contributions_from_cash: false,
            contributions: vec![],
            withdrawals: vec![],
        };
        let mut state = InvestmentState::new(investment.starting_value);
        let effect = apply_month(&investment, &mut state, m("2025-01"));
        // growth = 100.00, tax = 20.00
        assert_eq!(currency::round(effect.cash_delta), dec!(-20.00));
        assert_eq!(currency::round(effect.costs), dec!(20.00));
    }
}
