use crate::args::YesNo;
use furever::features::care::{self, Symptom};

pub(crate) fn triage(symptom: Symptom, answer: YesNo) {
    println!("{}", symptom.question());
    println!("{}", care::triage(symptom, answer == YesNo::Yes));
}
