//! Built-in scenario quizzes.
//!
//! Each quiz is five short money decisions. Exactly one option per stage is
//! correct; `validate_catalog` enforces that in tests.

use crate::quiz::{OptionDefinition, QuizDefinition, StageDefinition};

fn opt(id: &str, text: &str, outcome: &str, is_correct: bool) -> OptionDefinition {
    OptionDefinition::new(id, text, outcome, is_correct)
}

/// All built-in quizzes, in catalog order.
pub fn builtin_quizzes() -> Vec<QuizDefinition> {
    vec![
        budget_basics(),
        emergency_fund(),
        smart_shopping(),
        credit_card_trap(),
        first_paycheck(),
    ]
}

fn budget_basics() -> QuizDefinition {
    QuizDefinition::new(
        "budget-basics",
        "Budget Basics",
        vec![
            StageDefinition::new(
                1,
                "You get $40 a week from your part-time job. What's the first step to manage it?",
                vec![
                    opt(
                        "a",
                        "Spend it as it comes in",
                        "Without a plan, money disappears fast.",
                        false,
                    ),
                    opt(
                        "b",
                        "Write down what you earn and spend",
                        "Tracking is the foundation of every budget.",
                        true,
                    ),
                    opt(
                        "c",
                        "Keep it all in your wallet",
                        "Cash in a wallet is easy to spend without noticing.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                2,
                "Your friends invite you to a $25 concert, but you planned to save $20 this week.",
                vec![
                    opt(
                        "a",
                        "Go and skip saving this week",
                        "Skipping once makes it easier to skip again.",
                        false,
                    ),
                    opt(
                        "b",
                        "Borrow money from a friend",
                        "Borrowing for wants starts a habit of debt.",
                        false,
                    ),
                    opt(
                        "c",
                        "Look for a cheaper plan or save up for the next one",
                        "Adjusting plans keeps your savings goal intact.",
                        true,
                    ),
                ],
            ),
            StageDefinition::new(
                3,
                "Which of these is a need rather than a want?",
                vec![
                    opt(
                        "a",
                        "Bus pass to get to work",
                        "Transport to your job keeps the income coming.",
                        true,
                    ),
                    opt("b", "New game skin", "Fun, but not essential.", false),
                    opt(
                        "c",
                        "Daily bubble tea",
                        "Small treats add up to a lot over a month.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                4,
                "A popular rule splits income into needs, wants and savings. What's the classic split?",
                vec![
                    opt(
                        "a",
                        "50 / 30 / 20",
                        "Half for needs, 30% for wants, 20% for savings.",
                        true,
                    ),
                    opt(
                        "b",
                        "20 / 30 / 50",
                        "That puts half your income into savings, which is rarely realistic.",
                        false,
                    ),
                    opt(
                        "c",
                        "80 / 20 / 0",
                        "Leaving nothing for savings means no safety net.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                5,
                "At the end of the month you have $15 left over. What do you do?",
                vec![
                    opt(
                        "a",
                        "Spend it, you earned it",
                        "Leftover money is a chance to get ahead.",
                        false,
                    ),
                    opt(
                        "b",
                        "Move it to savings",
                        "Paying your future self turns leftovers into progress.",
                        true,
                    ),
                    opt("c", "Ignore it", "Money without a job tends to wander off.", false),
                ],
            ),
        ],
    )
    .with_rewards(50, 100)
}

fn emergency_fund() -> QuizDefinition {
    QuizDefinition::new(
        "emergency-fund",
        "Rainy Day Fund",
        vec![
            StageDefinition::new(
                1,
                "What is an emergency fund for?",
                vec![
                    opt(
                        "a",
                        "Unexpected costs like repairs or medical bills",
                        "That's exactly its job.",
                        true,
                    ),
                    opt(
                        "b",
                        "Holiday shopping",
                        "Holidays are predictable; plan for them separately.",
                        false,
                    ),
                    opt(
                        "c",
                        "Investing in the stock market",
                        "Emergency money needs to be available right away.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                2,
                "Where should you keep an emergency fund?",
                vec![
                    opt(
                        "a",
                        "Under your mattress",
                        "Cash at home can be lost or stolen and earns nothing.",
                        false,
                    ),
                    opt(
                        "b",
                        "A savings account you can reach quickly",
                        "Safe, accessible, and it earns a little interest.",
                        true,
                    ),
                    opt(
                        "c",
                        "In cryptocurrency",
                        "Prices swing too much for money you may need tomorrow.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                3,
                "How big should a grown-up's emergency fund eventually be?",
                vec![
                    opt(
                        "a",
                        "One week of expenses",
                        "A good start, but it won't cover much.",
                        false,
                    ),
                    opt(
                        "b",
                        "Three to six months of expenses",
                        "That covers most job losses and big surprises.",
                        true,
                    ),
                    opt(
                        "c",
                        "Ten years of expenses",
                        "That money would do more invested for the long term.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                4,
                "Your phone screen cracks. You have $60 in your emergency fund. What now?",
                vec![
                    opt(
                        "a",
                        "Use the fund, then rebuild it",
                        "This is what the fund is for; refill it afterwards.",
                        true,
                    ),
                    opt(
                        "b",
                        "Put it on a credit card instead",
                        "Interest makes the repair cost more.",
                        false,
                    ),
                    opt(
                        "c",
                        "Ignore it and keep the fund untouched",
                        "A fund you never use is not doing its job.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                5,
                "What's the easiest way to grow the fund steadily?",
                vec![
                    opt(
                        "a",
                        "Save whatever is left at the end of the month",
                        "Often nothing is left.",
                        false,
                    ),
                    opt(
                        "b",
                        "Set up an automatic transfer on payday",
                        "Automating saves before you can spend it.",
                        true,
                    ),
                    opt(
                        "c",
                        "Wait for a big windfall",
                        "Windfalls are rare; small amounts add up sooner.",
                        false,
                    ),
                ],
            ),
        ],
    )
    .with_rewards(60, 120)
}

fn smart_shopping() -> QuizDefinition {
    QuizDefinition::new(
        "smart-shopping",
        "Smart Shopper",
        vec![
            StageDefinition::new(
                1,
                "Headphones cost $80 online and $95 in store. The store is a bus ride away. Which is the better deal?",
                vec![
                    opt(
                        "a",
                        "Online, if shipping is free",
                        "Compare the total cost, including shipping and travel.",
                        true,
                    ),
                    opt(
                        "b",
                        "In store, because it's a real shop",
                        "Paying $15 more plus bus fare isn't a deal.",
                        false,
                    ),
                    opt(
                        "c",
                        "Whichever has the nicer box",
                        "Packaging doesn't change what you get.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                2,
                "A sign says \"Buy 2, get 1 free\" on snacks you rarely eat. What do you do?",
                vec![
                    opt(
                        "a",
                        "Buy 3, it's free food",
                        "A deal on something you don't need is still spending.",
                        false,
                    ),
                    opt(
                        "b",
                        "Skip it",
                        "Only buy deals on things you were going to buy anyway.",
                        true,
                    ),
                    opt(
                        "c",
                        "Buy 6 to double the savings",
                        "Doubling a deal you don't need doubles the waste.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                3,
                "How can you tell which cereal box is cheaper?",
                vec![
                    opt(
                        "a",
                        "Pick the bigger box",
                        "Bigger isn't always cheaper per serving.",
                        false,
                    ),
                    opt(
                        "b",
                        "Compare the unit price per 100g",
                        "Unit pricing shows the real cost.",
                        true,
                    ),
                    opt(
                        "c",
                        "Pick the one on sale",
                        "A sale price can still be higher per gram.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                4,
                "You really want new sneakers. What's a smart move before buying?",
                vec![
                    opt(
                        "a",
                        "Wait 48 hours and see if you still want them",
                        "A cooling-off period beats impulse buying.",
                        true,
                    ),
                    opt(
                        "b",
                        "Buy them immediately before they sell out",
                        "Urgency is a classic sales trick.",
                        false,
                    ),
                    opt("c", "Buy two pairs in case", "That doubles the cost of one want.", false),
                ],
            ),
            StageDefinition::new(
                5,
                "An app offers \"buy now, pay later\" on a $120 jacket. What's the catch?",
                vec![
                    opt(
                        "a",
                        "There is none, it's free money",
                        "You still owe the full amount.",
                        false,
                    ),
                    opt(
                        "b",
                        "Missed payments can add fees and hurt your credit",
                        "Deferred payments are still debt.",
                        true,
                    ),
                    opt(
                        "c",
                        "The jacket will be lower quality",
                        "Payment method doesn't change the jacket.",
                        false,
                    ),
                ],
            ),
        ],
    )
    .with_rewards(50, 100)
}

fn credit_card_trap() -> QuizDefinition {
    QuizDefinition::new(
        "credit-card-trap",
        "The Credit Card Trap",
        vec![
            StageDefinition::new(
                1,
                "What happens if you only pay the minimum on a credit card?",
                vec![
                    opt(
                        "a",
                        "The rest of the balance is forgiven",
                        "Nothing is forgiven; the balance keeps growing.",
                        false,
                    ),
                    opt(
                        "b",
                        "Interest is charged on the remaining balance",
                        "Interest on unpaid balances makes purchases much more expensive.",
                        true,
                    ),
                    opt(
                        "c",
                        "Your credit limit goes up",
                        "Limits don't reward minimum payments.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                2,
                "A card has 24% APR. Roughly how much interest does a $500 balance cost over a year?",
                vec![
                    opt("a", "About $12", "That's closer to one month's interest.", false),
                    opt("b", "About $120", "24% of $500 is $120 a year if nothing is paid.", true),
                    opt("c", "Nothing", "APR means interest is charged every year.", false),
                ],
            ),
            StageDefinition::new(
                3,
                "What builds a good credit score?",
                vec![
                    opt(
                        "a",
                        "Paying bills on time, every time",
                        "Payment history is the biggest factor.",
                        true,
                    ),
                    opt(
                        "b",
                        "Opening many cards at once",
                        "Lots of new accounts can lower your score.",
                        false,
                    ),
                    opt("c", "Maxing out your limit", "High usage signals risk to lenders.", false),
                ],
            ),
            StageDefinition::new(
                4,
                "A store offers 15% off today if you open their credit card. Smart move?",
                vec![
                    opt(
                        "a",
                        "Yes, always take the discount",
                        "Store cards often carry very high interest.",
                        false,
                    ),
                    opt(
                        "b",
                        "Only if you'd pay it off in full and need the card",
                        "A discount is only worth it without interest or extra spending.",
                        true,
                    ),
                    opt(
                        "c",
                        "Yes, and spend more to get more discount",
                        "Spending more to save is still spending more.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                5,
                "You already owe on two cards. Which do you pay down first to save the most?",
                vec![
                    opt(
                        "a",
                        "The one with the highest interest rate",
                        "The avalanche method saves the most money.",
                        true,
                    ),
                    opt(
                        "b",
                        "The one with the prettiest design",
                        "Looks don't affect interest.",
                        false,
                    ),
                    opt(
                        "c",
                        "Split payments evenly",
                        "Even splits leave the costly balance growing.",
                        false,
                    ),
                ],
            ),
        ],
    )
    .with_rewards(75, 150)
}

fn first_paycheck() -> QuizDefinition {
    QuizDefinition::new(
        "first-paycheck",
        "Your First Paycheck",
        vec![
            StageDefinition::new(
                1,
                "Your job pays $500, but your paycheck shows $430. Why?",
                vec![
                    opt(
                        "a",
                        "Your boss made a mistake",
                        "More likely, taxes were withheld.",
                        false,
                    ),
                    opt(
                        "b",
                        "Taxes and deductions were taken out",
                        "Gross pay minus deductions is your net pay.",
                        true,
                    ),
                    opt(
                        "c",
                        "The bank charged a fee",
                        "Banks don't change your paycheck amount.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                2,
                "What's the difference between gross and net pay?",
                vec![
                    opt(
                        "a",
                        "Gross is before deductions, net is what you take home",
                        "Budget with net pay; it's what you can actually spend.",
                        true,
                    ),
                    opt("b", "They're the same thing", "Deductions make them different.", false),
                    opt("c", "Net is before deductions", "It's the other way round.", false),
                ],
            ),
            StageDefinition::new(
                3,
                "How should you receive your pay to keep it safe?",
                vec![
                    opt(
                        "a",
                        "Direct deposit into a bank account",
                        "Fast, safe and easy to track.",
                        true,
                    ),
                    opt("b", "Cash in an envelope", "Easy to lose and hard to track.", false),
                    opt(
                        "c",
                        "A check you cash at a check-cashing store",
                        "Those stores charge fees every time.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                4,
                "What's a smart first thing to do with each paycheck?",
                vec![
                    opt(
                        "a",
                        "Pay yourself first by saving a set amount",
                        "Saving first makes it a habit, not an afterthought.",
                        true,
                    ),
                    opt(
                        "b",
                        "Buy something to celebrate",
                        "Celebrating every paycheck drains it quickly.",
                        false,
                    ),
                    opt(
                        "c",
                        "Lend it to a friend",
                        "Your income should cover your goals first.",
                        false,
                    ),
                ],
            ),
            StageDefinition::new(
                5,
                "You're offered a job-sponsored retirement plan with a company match. What do you do?",
                vec![
                    opt(
                        "a",
                        "Skip it, retirement is far away",
                        "Starting early lets compound growth do the work.",
                        false,
                    ),
                    opt(
                        "b",
                        "Contribute at least enough to get the full match",
                        "The match is free money added to your savings.",
                        true,
                    ),
                    opt(
                        "c",
                        "Wait until you're older",
                        "Every year of waiting is growth you miss.",
                        false,
                    ),
                ],
            ),
        ],
    )
    .with_rewards(60, 120)
}
