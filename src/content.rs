//! Static study content: the question bank and the featured hadith.
//!
//! Loaded once at startup and read-only afterwards.

/// A multiple-choice question.
#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: &'static str,
    pub options: Vec<&'static str>,
    /// Index into `options`; always points at a real option.
    pub correct_index: usize,
    /// Shown after the question has been answered.
    pub explanation: &'static str,
}

/// The featured saying shown on the home screen.
#[derive(Debug, Clone)]
pub struct Hadith {
    pub text: &'static str,
    pub source: &'static str,
}

pub struct QuestionBank {
    questions: Vec<Question>,
    hadith: Hadith,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self {
            questions: question_list(),
            hadith: Hadith {
                text: "তোমাদের মধ্যে সেই ব্যক্তিই সর্বোত্তম, যে নিজে কুরআন শেখে এবং অন্যকে তা শেখায়।",
                source: "সহিহ বুখারি",
            },
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn hadith(&self) -> &Hadith {
        &self.hadith
    }
}

fn question_list() -> Vec<Question> {
    vec![
        Question {
            prompt: "ইসলামের মোট কয়টি স্তম্ভ রয়েছে?",
            options: vec!["তিনটি", "চারটি", "পাঁচটি", "ছয়টি"],
            correct_index: 2,
            explanation: "ইসলামের পাঁচটি স্তম্ভ হলো কালিমা, নামাজ, রোজা, যাকাত ও হজ।",
        },
        Question {
            prompt: "পবিত্র কুরআন কোন ভাষায় নাজিল হয়েছে?",
            options: vec!["ফারসি", "আরবি", "উর্দু", "হিব্রু"],
            correct_index: 1,
            explanation: "পবিত্র কুরআন আরবি ভাষায় নাজিল হয়েছে।",
        },
        Question {
            prompt: "মুসলমানরা প্রতিদিন কত ওয়াক্ত নামাজ আদায় করেন?",
            options: vec!["তিন ওয়াক্ত", "চার ওয়াক্ত", "পাঁচ ওয়াক্ত", "সাত ওয়াক্ত"],
            correct_index: 2,
            explanation: "ফজর, যোহর, আসর, মাগরিব ও এশা — এই পাঁচ ওয়াক্ত নামাজ ফরজ।",
        },
        Question {
            prompt: "রমজান মাসে মুসলমানদের জন্য কোন ইবাদত ফরজ?",
            options: vec!["হজ", "রোজা", "কুরবানি", "ইতিকাফ"],
            correct_index: 1,
            explanation: "রমজান মাসের রোজা প্রত্যেক প্রাপ্তবয়স্ক মুসলমানের জন্য ফরজ।",
        },
        Question {
            prompt: "আমাদের প্রিয় নবী হযরত মুহাম্মদ (সা.) কোন শহরে জন্মগ্রহণ করেন?",
            options: vec!["মদিনা", "মক্কা", "তায়েফ", "জেরুজালেম"],
            correct_index: 1,
            explanation: "নবীজি (সা.) মক্কা নগরীতে জন্মগ্রহণ করেন।",
        },
        Question {
            prompt: "পবিত্র কুরআনের প্রথম সূরা কোনটি?",
            options: vec!["সূরা বাকারা", "সূরা ফাতিহা", "সূরা ইখলাস", "সূরা নাস"],
            correct_index: 1,
            explanation: "সূরা ফাতিহা দিয়ে কুরআন শুরু হয়েছে; একে উম্মুল কুরআনও বলা হয়।",
        },
        Question {
            prompt: "কাবা শরিফ কোথায় অবস্থিত?",
            options: vec!["মদিনা", "জেরুজালেম", "মক্কা", "বাগদাদ"],
            correct_index: 2,
            explanation: "কাবা শরিফ মক্কা নগরীর মসজিদুল হারামে অবস্থিত।",
        },
        Question {
            prompt: "মুসলমানদের সাপ্তাহিক বিশেষ জামাতের নামাজ কোন দিনে হয়?",
            options: vec!["সোমবার", "বৃহস্পতিবার", "শুক্রবার", "শনিবার"],
            correct_index: 2,
            explanation: "শুক্রবার জুমার নামাজ জামাতে আদায় করা হয়।",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_is_not_empty() {
        assert!(!QuestionBank::new().questions().is_empty());
    }

    #[test]
    fn every_question_is_well_formed() {
        for question in QuestionBank::new().questions() {
            assert!(question.options.len() >= 2, "{}", question.prompt);
            assert!(
                question.correct_index < question.options.len(),
                "{}",
                question.prompt
            );
            assert!(!question.prompt.is_empty());
            assert!(!question.explanation.is_empty());
        }
    }

    #[test]
    fn hadith_has_text_and_source() {
        let bank = QuestionBank::new();
        assert!(!bank.hadith().text.is_empty());
        assert!(!bank.hadith().source.is_empty());
    }
}
