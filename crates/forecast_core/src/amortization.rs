//! AmortizationEngine (L1): the per-loan schedule state machine of §4.3.
//!
//! This is the single most intricate component in the engine — escrow
//! refund accounting, a mortgage-insurance cutoff, extra-principal capping,
//! two distinct early-payoff paths, and post-maturity escrow extrapolation
//! all interact. Each numbered step below corresponds to the identically
//! numbered rule in the design document's §4.3.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::calendar::Month;
use crate::currency::{self, rounds_to_zero};
use crate::error::ConfigError;
use crate::model::{Loan, Payment, Schedule};

/// Months strictly between `after` and `before_excl`, i.e. `after+1 ..=
/// before_excl-1`, restricted to Decembers. Used both by the absolute-date
/// early-payoff path and the maturity path for post-schedule escrow
/// extrapolation — both describe the identical "Decembers from X through
/// (excluding) Y" range in §4.3.
fn decembers_between(after: Month, before_excl: Month) -> Vec<Month> {
    let mut result = Vec::new();
    let mut month = after.offset(1);
    while month < before_excl {
        if month.month_of() == 12 {
            result.push(month);
        }
        month = month.offset(1);
    }
    result
}

fn december_extrapolation_payment(escrow_monthly: Decimal) -> Payment {
    Payment {
        total: currency::round(escrow_monthly * Decimal::from(12)),
        principal_portion: Decimal::ZERO,
        interest_portion: Decimal::ZERO,
        remaining_principal: Decimal::ZERO,
        refundable_escrow: Decimal::ZERO,
    }
}

fn monthly_payment_amount(financed_principal: Decimal, periodic_rate: Decimal, term_months: i32) -> Decimal {
    if financed_principal.is_zero() {
        return Decimal::ZERO;
    }
    if periodic_rate.is_zero() {
        return financed_principal / Decimal::from(term_months);
    }
    let growth = (Decimal::ONE + periodic_rate).powi(term_months as i64);
    financed_principal * periodic_rate * growth / (growth - Decimal::ONE)
}

/// Above the cutoff, mortgage insurance is charged; at or below it, it is
/// dropped. §9's Open Question resolves the base `monthlyPayment` as never
/// including MI, so this is purely additive — see `DESIGN.md`.
fn mortgage_insurance_charge(loan: &Loan, remaining_principal: Decimal) -> Decimal {
    if loan.mortgage_insurance_cutoff_percent.is_zero() || loan.financed_principal().is_zero() {
        return Decimal::ZERO;
    }
    let ratio = remaining_principal / loan.financed_principal();
    if ratio > loan.mortgage_insurance_cutoff_percent / Decimal::from(100) {
        loan.mortgage_insurance_monthly
    } else {
        Decimal::ZERO
    }
}

/// Generate `loan`'s full amortization schedule from `loan.start_month`
/// through (at most) `terminal_month`.
pub fn generate_schedule(loan: &Loan, terminal_month: Month) -> Result<Schedule, ConfigError> {
    if loan.term_months < 0 {
        return Err(ConfigError::NegativeTerm {
            loan: loan.name.clone(),
            term: loan.term_months,
        });
    }
    if loan.term_months == 0 {
        return Err(ConfigError::NonPositiveTerm {
            loan: loan.name.clone(),
            term: loan.term_months,
        });
    }

    let financed_principal = loan.financed_principal();
    let periodic_rate = loan.annual_interest_rate_percent / Decimal::from(1200);
    let monthly_payment = monthly_payment_amount(financed_principal, periodic_rate, loan.term_months);

    let mut schedule: Schedule = Schedule::new();

    // --- Month 1, unconditional. ---
    let start_extra = loan.extra_principal_at(loan.start_month);
    let interest_portion = financed_principal * periodic_rate;
    let principal_portion = monthly_payment - interest_portion + start_extra;
    let remaining_principal = financed_principal - principal_portion;
    let total = monthly_payment + loan.escrow_monthly + loan.down_payment + start_extra;

    schedule.insert(
        loan.start_month,
        Payment {
            total: currency::round(total),
            principal_portion: currency::round(principal_portion),
            interest_portion: currency::round(interest_portion),
            remaining_principal: currency::round(remaining_principal),
            refundable_escrow: loan.escrow_monthly,
        },
    );

    if loan.term_months == 1 {
        return Ok(schedule);
    }

    let mut previous_remaining = remaining_principal;
    let mut previous_refundable = loan.escrow_monthly;

    for k in 2..=loan.term_months {
        let current_month = loan.start_month.offset(k - 1);

        // Step 1: the generator never emits payments strictly past the
        // simulation horizon. A payment *at* the terminal month is still
        // emitted (Scenario A requires the final month's payment to land).
        if current_month > terminal_month {
            break;
        }

        // Step 2: annual escrow reset.
        let refundable_escrow = if current_month.month_of() == 1 {
            Decimal::ZERO
        } else {
            previous_refundable + loan.escrow_monthly
        };

        // Step 3: early payoff by absolute date.
        if loan.early_payoff_month == Some(current_month) {
            let total = if loan.sell_property {
                previous_remaining - loan.sell_price + loan.sell_costs_net
            } else {
                previous_remaining - refundable_escrow
            };
            schedule.insert(
                current_month,
                Payment {
                    total: currency::round(total),
                    principal_portion: Decimal::ZERO,
                    interest_portion: Decimal::ZERO,
                    remaining_principal: Decimal::ZERO,
                    refundable_escrow,
                },
            );

            if !loan.sell_property && currency::is_positive(loan.escrow_monthly) {
                for december in decembers_between(current_month, terminal_month) {
                    schedule.insert(december, december_extrapolation_payment(loan.escrow_monthly));
                }
            }
            return Ok(schedule);
        }

        // Step 4: regular payment.
        let extra_raw = loan.extra_principal_at(current_month);
        let extra = extra_raw.min(previous_remaining);
        let interest_portion = previous_remaining * periodic_rate;
        let principal_portion = monthly_payment - interest_portion + extra;
        let mut total = monthly_payment + loan.escrow_monthly + extra;
        let candidate_remaining = previous_remaining - principal_portion;

        let is_last_scheduled_month = k == loan.term_months;
        let matured = is_last_scheduled_month || rounds_to_zero(candidate_remaining);

        let remaining_principal = if matured {
            if current_month.month_of() != 12 {
                total -= refundable_escrow + loan.escrow_monthly;
            }
            Decimal::ZERO
        } else {
            candidate_remaining
        };

        total += mortgage_insurance_charge(loan, remaining_principal);

        schedule.insert(
            current_month,
            Payment {
                total: currency::round(total),
                principal_portion: currency::round(principal_portion),
                interest_portion: currency::round(interest_portion),
                remaining_principal: currency::round(remaining_principal),
                refundable_escrow,
            },
        );

        if matured {
            for december in decembers_between(current_month, terminal_month) {
                schedule.insert(december, december_extrapolation_payment(loan.escrow_monthly));
            }
            return Ok(schedule);
        }

        previous_remaining = remaining_principal;
        previous_refundable = refundable_escrow;
    }

    Ok(schedule)
}

/// Fire an early payoff triggered by the running liquid balance crossing
/// `loan.early_payoff_threshold` (§4.5 step 2). Overwrites the schedule
/// entry at `trigger_month` and deletes everything after it, re-inserting
/// December escrow extrapolation if the property is kept. Disarms the
/// threshold so the same loan cannot re-trigger.
pub fn fire_threshold_payoff(loan: &mut Loan, trigger_month: Month, terminal_month: Month) -> Payment {
    let previous_remaining = loan
        .schedule
        .get(&trigger_month.offset(-1))
        .map(|p| p.remaining_principal)
        .unwrap_or(Decimal::ZERO);
    let refundable_escrow = loan
        .schedule
        .get(&trigger_month)
        .map(|p| p.refundable_escrow)
        .unwrap_or(Decimal::ZERO);

    let total = if loan.sell_property {
        previous_remaining - loan.sell_price + loan.sell_costs_net
    } else {
        previous_remaining - refundable_escrow
    };
    let payment = Payment {
        total: currency::round(total),
        principal_portion: Decimal::ZERO,
        interest_portion: Decimal::ZERO,
        remaining_principal: Decimal::ZERO,
        refundable_escrow,
    };

    loan.schedule.retain(|month, _| *month <= trigger_month);
    loan.schedule.insert(trigger_month, payment);

    if !loan.sell_property && currency::is_positive(loan.escrow_monthly) {
        for december in decembers_between(trigger_month, terminal_month) {
            loan.schedule
                .insert(december, december_extrapolation_payment(loan.escrow_monthly));
        }
    }

    loan.early_payoff_threshold = Decimal::ZERO;
    payment
}
