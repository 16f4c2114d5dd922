//! Price command implementation.
//!
//! Prices a fixed-coupon bond by discounted cash flow. With no arguments it
//! prices the demo bond: 1000 face, 5% coupon, 6% yield, 5 years, semi-annual.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use bondval_core::{BondSpec, DiscountedCashFlow, PriceBreakdown, DEFAULT_FREQUENCY};

use crate::cli::OutputFormat;
use crate::commands::{validate_coupon, validate_face_value, validate_yield};
use crate::output::{print_header, print_output, print_single, print_success, KeyValue};

/// Years to maturity when neither `--years` nor `--periods` is given.
const DEFAULT_YEARS: u32 = 5;

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Face (par) value
    #[arg(long, default_value = "1000")]
    pub face: f64,

    /// Annual coupon rate (as percentage, e.g., 5.0 for 5%)
    #[arg(short, long, default_value = "5.0")]
    pub coupon: f64,

    /// Annual yield to maturity (as percentage)
    #[arg(
        short = 'y',
        long = "yield",
        default_value = "6.0",
        allow_negative_numbers = true
    )]
    pub yield_pct: f64,

    /// Years to maturity; periods = years x frequency [default: 5]
    #[arg(long, group = "term")]
    pub years: Option<u32>,

    /// Total number of coupon periods (instead of --years)
    #[arg(short, long, group = "term")]
    pub periods: Option<u32>,

    /// Coupon frequency: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long, default_value_t = DEFAULT_FREQUENCY)]
    pub frequency: u32,

    /// Also show the discounted cash flow schedule
    #[arg(long)]
    pub schedule: bool,
}

impl PriceArgs {
    fn periods(&self) -> u32 {
        self.periods.unwrap_or_else(|| {
            self.years
                .unwrap_or(DEFAULT_YEARS)
                .saturating_mul(self.frequency)
        })
    }
}

/// JSON shape of a pricing result.
#[derive(Debug, Serialize)]
struct PriceOutput {
    bond: BondSpec,
    #[serde(flatten)]
    breakdown: PriceBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    cash_flows: Option<Vec<DiscountedCashFlow>>,
}

/// One row of the cash flow table.
#[derive(Debug, Serialize, Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Period")]
    period: u32,
    #[tabled(rename = "Cash Flow")]
    amount: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
    #[tabled(rename = "Present Value")]
    present_value: String,
}

impl From<&DiscountedCashFlow> for ScheduleRow {
    fn from(cf: &DiscountedCashFlow) -> Self {
        Self {
            period: cf.period,
            amount: format!("{:.2}", cf.amount),
            discount_factor: format!("{:.6}", cf.discount_factor),
            present_value: format!("{:.2}", cf.present_value),
        }
    }
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let face_value = validate_face_value(args.face)?;
    let coupon = validate_coupon(args.coupon)?;
    let yield_pct = validate_yield(args.yield_pct)?;

    let bond = BondSpec {
        face_value,
        coupon_rate: coupon / 100.0,
        periods: args.periods(),
        yield_to_maturity: yield_pct / 100.0,
        freq: args.frequency,
    };
    debug!(%bond, "Pricing bond");

    let breakdown = bond.price_detailed()?;
    let cash_flows = if args.schedule {
        Some(bond.cash_flows()?)
    } else {
        None
    };

    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header("Bond Pricing Results");
            }
            print_output(&summary_rows(&bond, &breakdown), format)?;

            if let Some(flows) = &cash_flows {
                if !quiet {
                    print_header("Cash Flows");
                }
                print_output(&schedule_rows(flows), format)?;
            }

            print_success(&format!("Bond Price: {:.2}", breakdown.price));
        }
        OutputFormat::Json => {
            print_single(&PriceOutput {
                bond,
                breakdown,
                cash_flows,
            })?;
        }
        OutputFormat::Csv => match &cash_flows {
            Some(flows) => print_output(&schedule_rows(flows), format)?,
            None => print_output(&summary_rows(&bond, &breakdown), format)?,
        },
        OutputFormat::Minimal => {
            println!("{:.2}", breakdown.price);
        }
    }

    Ok(())
}

fn summary_rows(bond: &BondSpec, breakdown: &PriceBreakdown) -> Vec<KeyValue> {
    let frequency = bond
        .frequency()
        .map_or_else(|| format!("{} per year", bond.freq), |f| f.to_string());

    vec![
        KeyValue::from_f64("Face Value", bond.face_value, 2),
        KeyValue::from_percent("Coupon", bond.coupon_rate),
        KeyValue::from_percent("Yield to Maturity", bond.yield_to_maturity),
        KeyValue::new("Frequency", frequency),
        KeyValue::new("Periods", bond.periods.to_string()),
        KeyValue::from_f64("PV Coupons", breakdown.pv_coupons, 6),
        KeyValue::from_f64("PV Face", breakdown.pv_face, 6),
        KeyValue::from_f64("Price", breakdown.price, 6),
    ]
}

fn schedule_rows(flows: &[DiscountedCashFlow]) -> Vec<ScheduleRow> {
    flows.iter().map(ScheduleRow::from).collect()
}
