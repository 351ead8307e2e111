// =============================================================================
// Interpreter Instances — RSI, MACD, Sentiment Index
// =============================================================================
//
// The concrete threshold ladders.  RSI bounds come from the runtime
// configuration; the MACD and sentiment ladders are fixed by definition.
//
// Colours follow the dashboard palette.

use crate::signals::ladder::ThresholdLadder;
use crate::types::{Classification, Signal};

const GREEN: &str = "#00ff88";
const RED: &str = "#ff3a3a";
const GOLD: &str = "#ffd700";
const ORANGE: &str = "#ff8c00";
const CYAN: &str = "#00d4ff";

// ── RSI ─────────────────────────────────────────────────────────────────────

const OVERSOLD: Classification = Classification {
    signal: Signal::Buy,
    label: "OVERSOLD",
    color: GREEN,
    description: "Strong buy signal - market is oversold",
};

const RSI_NEUTRAL: Classification = Classification {
    signal: Signal::Neutral,
    label: "NEUTRAL",
    color: GOLD,
    description: "RSI in the neutral range",
};

const OVERBOUGHT: Classification = Classification {
    signal: Signal::Sell,
    label: "OVERBOUGHT",
    color: RED,
    description: "Sell signal - market is overbought",
};

/// Build the RSI ladder for the given (tunable) thresholds.
pub fn rsi_ladder(oversold: f64, overbought: f64) -> ThresholdLadder {
    ThresholdLadder::new(
        vec![(oversold, OVERSOLD), (overbought, RSI_NEUTRAL)],
        OVERBOUGHT,
    )
}

/// Classify an RSI value against the configured oversold/overbought bounds.
pub fn interpret_rsi(value: f64, oversold: f64, overbought: f64) -> Classification {
    rsi_ladder(oversold, overbought).classify(value)
}

// ── MACD ────────────────────────────────────────────────────────────────────

const BULLISH: Classification = Classification {
    signal: Signal::Buy,
    label: "BULLISH",
    color: GREEN,
    description: "Upward trend - bullish signal",
};

const BEARISH: Classification = Classification {
    signal: Signal::Sell,
    label: "BEARISH",
    color: RED,
    description: "Downward trend - bearish signal",
};

/// Build the MACD ladder: strictly positive is bullish, everything else —
/// including exactly zero — is bearish.  There is no neutral band.
pub fn macd_ladder() -> ThresholdLadder {
    // The rung bound is the smallest value above zero, so an exactly-zero
    // MACD stays below it and classifies bearish under the strict-less-than
    // rule, while every positive value clears it.
    ThresholdLadder::new(vec![(0.0_f64.next_up(), BEARISH)], BULLISH)
}

/// Classify a MACD value: `> 0` bullish, `<= 0` bearish.
pub fn interpret_macd(value: f64) -> Classification {
    macd_ladder().classify(value)
}

// ── Sentiment index (Fear & Greed, 0-100) ───────────────────────────────────

const EXTREME_FEAR: Classification = Classification {
    signal: Signal::Buy,
    label: "EXTREME FEAR",
    color: RED,
    description: "Market is extremely fearful - potential buying opportunity",
};

const FEAR: Classification = Classification {
    signal: Signal::Buy,
    label: "FEAR",
    color: ORANGE,
    description: "Market is fearful - cautious buying possible",
};

const SENTIMENT_NEUTRAL: Classification = Classification {
    signal: Signal::Neutral,
    label: "NEUTRAL",
    color: GOLD,
    description: "Market is balanced",
};

const GREED: Classification = Classification {
    signal: Signal::Sell,
    label: "GREED",
    color: CYAN,
    description: "Market is getting greedy - beware of overheating",
};

const EXTREME_GREED: Classification = Classification {
    signal: Signal::Sell,
    label: "EXTREME GREED",
    color: GREEN,
    description: "Market is extremely greedy - correction likely",
};

/// Build the five-bucket sentiment ladder.
pub fn sentiment_ladder() -> ThresholdLadder {
    ThresholdLadder::new(
        vec![
            (25.0, EXTREME_FEAR),
            (45.0, FEAR),
            (55.0, SENTIMENT_NEUTRAL),
            (75.0, GREED),
        ],
        EXTREME_GREED,
    )
}

/// Classify a 0-100 sentiment index value.
pub fn interpret_sentiment(value: f64) -> Classification {
    sentiment_ladder().classify(value)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    // ---- RSI ---------------------------------------------------------------

    #[test]
    fn rsi_buckets() {
        assert_eq!(interpret_rsi(15.0, 30.0, 70.0).signal, Signal::Buy);
        assert_eq!(interpret_rsi(50.0, 30.0, 70.0).signal, Signal::Neutral);
        assert_eq!(interpret_rsi(85.0, 30.0, 70.0).signal, Signal::Sell);
    }

    #[test]
    fn rsi_oversold_boundary_is_strict() {
        // 29.999 is still oversold; exactly 30.0 is already neutral.
        let low = interpret_rsi(29.999, 30.0, 70.0);
        assert_eq!(low.signal, Signal::Buy);
        assert_eq!(low.label, "OVERSOLD");

        let at_bound = interpret_rsi(30.0, 30.0, 70.0);
        assert_eq!(at_bound.signal, Signal::Neutral);
    }

    #[test]
    fn rsi_overbought_boundary_is_strict() {
        assert_eq!(interpret_rsi(69.999, 30.0, 70.0).signal, Signal::Neutral);
        assert_eq!(interpret_rsi(70.0, 30.0, 70.0).label, "OVERBOUGHT");
    }

    #[test]
    fn rsi_thresholds_are_tunable() {
        // A deployment running tighter bounds shifts the buckets with it.
        assert_eq!(interpret_rsi(35.0, 40.0, 60.0).signal, Signal::Buy);
        assert_eq!(interpret_rsi(35.0, 30.0, 70.0).signal, Signal::Neutral);
    }

    // ---- MACD --------------------------------------------------------------

    #[test]
    fn macd_positive_is_bullish() {
        let c = interpret_macd(0.000001);
        assert_eq!(c.signal, Signal::Buy);
        assert_eq!(c.label, "BULLISH");
    }

    #[test]
    fn macd_exactly_zero_is_bearish() {
        // No neutral band: the zero boundary belongs to the bearish side.
        let c = interpret_macd(0.0);
        assert_eq!(c.signal, Signal::Sell);
        assert_eq!(c.label, "BEARISH");
        assert_eq!(interpret_macd(-0.0).signal, Signal::Sell);
    }

    #[test]
    fn macd_negative_is_bearish() {
        assert_eq!(interpret_macd(-3.25).signal, Signal::Sell);
    }

    // ---- Sentiment ---------------------------------------------------------

    #[test]
    fn sentiment_buckets() {
        assert_eq!(interpret_sentiment(10.0).label, "EXTREME FEAR");
        assert_eq!(interpret_sentiment(30.0).label, "FEAR");
        assert_eq!(interpret_sentiment(50.0).label, "NEUTRAL");
        assert_eq!(interpret_sentiment(60.0).label, "GREED");
        assert_eq!(interpret_sentiment(90.0).label, "EXTREME GREED");
    }

    #[test]
    fn sentiment_boundaries_are_strict() {
        assert_eq!(interpret_sentiment(24.999).label, "EXTREME FEAR");
        assert_eq!(interpret_sentiment(25.0).label, "FEAR");
        assert_eq!(interpret_sentiment(44.999).label, "FEAR");
        assert_eq!(interpret_sentiment(45.0).label, "NEUTRAL");
        assert_eq!(interpret_sentiment(55.0).label, "GREED");
        assert_eq!(interpret_sentiment(75.0).label, "EXTREME GREED");
    }

    #[test]
    fn sentiment_signal_direction() {
        // Fearful markets read as buying opportunities, greedy ones as exits.
        assert_eq!(interpret_sentiment(20.0).signal, Signal::Buy);
        assert_eq!(interpret_sentiment(40.0).signal, Signal::Buy);
        assert_eq!(interpret_sentiment(50.0).signal, Signal::Neutral);
        assert_eq!(interpret_sentiment(70.0).signal, Signal::Sell);
        assert_eq!(interpret_sentiment(80.0).signal, Signal::Sell);
    }
}
