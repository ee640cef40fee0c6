//! Localised names and interpretation phrases per canonical key.

use mitra_core::models::classification::Direction;
use mitra_core::models::patient::Language;

pub struct Phrases {
    pub key: &'static str,
    pub name_en: &'static str,
    pub name_hi: &'static str,
    pub above_en: &'static str,
    pub above_hi: &'static str,
    pub below_en: &'static str,
    pub below_hi: &'static str,
}

impl Phrases {
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.name_en,
            Language::Hi => self.name_hi,
        }
    }

    pub fn phrase(&self, direction: Direction, language: Language) -> &'static str {
        match (direction, language) {
            (Direction::Below, Language::En) => self.below_en,
            (Direction::Below, Language::Hi) => self.below_hi,
            (_, Language::En) => self.above_en,
            (_, Language::Hi) => self.above_hi,
        }
    }
}

/// Used for keys without their own entry.
pub fn generic(language: Language) -> &'static str {
    match language {
        Language::En => "This value is outside the guideline range and should be reviewed by a doctor.",
        Language::Hi => "यह मान दिशानिर्देश सीमा से बाहर है, डॉक्टर से इसकी जाँच कराएं।",
    }
}

pub fn lookup(key: &str) -> Option<&'static Phrases> {
    PHRASES.iter().find(|p| p.key == key)
}

/// Display name of a canonical key, falling back to the key itself.
pub fn name_of(key: &str, language: Language) -> String {
    lookup(key).map_or_else(|| key.to_string(), |p| p.name(language).to_string())
}

const PHRASES: &[Phrases] = &[
    Phrases {
        key: "blood_sugar_fasting",
        name_en: "Fasting blood sugar",
        name_hi: "फास्टिंग ब्लड शुगर",
        above_en: "Raised fasting sugar points towards prediabetes or diabetes.",
        above_hi: "बढ़ी हुई फास्टिंग शुगर प्री-डायबिटीज़ या डायबिटीज़ की ओर संकेत करती है।",
        below_en: "Low fasting sugar can cause dizziness and weakness (hypoglycaemia).",
        below_hi: "कम शुगर से चक्कर और कमज़ोरी हो सकती है (हाइपोग्लाइसीमिया)।",
    },
    Phrases {
        key: "hba1c",
        name_en: "HbA1c",
        name_hi: "एचबीए1सी",
        above_en: "HbA1c reflects average sugar over three months; a raised value suggests poor sugar control.",
        above_hi: "एचबीए1सी तीन महीने की औसत शुगर दिखाता है; बढ़ा हुआ मान शुगर नियंत्रण ठीक न होने का संकेत है।",
        below_en: "A low HbA1c is uncommon and may relate to anaemia or blood loss.",
        below_hi: "कम एचबीए1सी असामान्य है और खून की कमी से जुड़ा हो सकता है।",
    },
    Phrases {
        key: "cholesterol_total",
        name_en: "Total cholesterol",
        name_hi: "कुल कोलेस्ट्रॉल",
        above_en: "High cholesterol increases the risk of heart disease and stroke.",
        above_hi: "अधिक कोलेस्ट्रॉल से हृदय रोग और स्ट्रोक का खतरा बढ़ता है।",
        below_en: "Very low cholesterol can reflect poor nutrition or thyroid and liver conditions.",
        below_hi: "बहुत कम कोलेस्ट्रॉल कुपोषण या थायरॉइड और लिवर की समस्या दर्शा सकता है।",
    },
    Phrases {
        key: "ldl",
        name_en: "LDL cholesterol",
        name_hi: "एलडीएल कोलेस्ट्रॉल",
        above_en: "LDL is the bad cholesterol; high levels clog arteries.",
        above_hi: "एलडीएल खराब कोलेस्ट्रॉल है; इसका अधिक स्तर धमनियों को अवरुद्ध करता है।",
        below_en: "Low LDL is generally not a concern.",
        below_hi: "कम एलडीएल आमतौर पर चिंता की बात नहीं है।",
    },
    Phrases {
        key: "hdl",
        name_en: "HDL cholesterol",
        name_hi: "एचडीएल कोलेस्ट्रॉल",
        above_en: "HDL is the good cholesterol; higher values are usually protective.",
        above_hi: "एचडीएल अच्छा कोलेस्ट्रॉल है; अधिक मान आमतौर पर सुरक्षा देता है।",
        below_en: "Low HDL reduces protection against heart disease.",
        below_hi: "कम एचडीएल से हृदय रोग से सुरक्षा घटती है।",
    },
    Phrases {
        key: "triglycerides",
        name_en: "Triglycerides",
        name_hi: "ट्राइग्लिसराइड्स",
        above_en: "High triglycerides are linked to heart disease and pancreatitis.",
        above_hi: "अधिक ट्राइग्लिसराइड्स हृदय रोग और पैंक्रियाटाइटिस से जुड़े हैं।",
        below_en: "Low triglycerides are generally not a concern.",
        below_hi: "कम ट्राइग्लिसराइड्स आमतौर पर चिंता की बात नहीं है।",
    },
    Phrases {
        key: "lpa",
        name_en: "Lipoprotein(a)",
        name_hi: "लिपोप्रोटीन(ए)",
        above_en: "Raised Lp(a) is an inherited risk factor for heart attack.",
        above_hi: "बढ़ा हुआ एलपी(ए) दिल के दौरे का आनुवंशिक जोखिम कारक है।",
        below_en: "Low Lp(a) is not a concern.",
        below_hi: "कम एलपी(ए) चिंता की बात नहीं है।",
    },
    Phrases {
        key: "homocysteine",
        name_en: "Homocysteine",
        name_hi: "होमोसिस्टीन",
        above_en: "High homocysteine can damage blood vessels and often reflects low B vitamins.",
        above_hi: "अधिक होमोसिस्टीन रक्त वाहिकाओं को नुकसान पहुँचा सकता है और अक्सर बी विटामिन की कमी दर्शाता है।",
        below_en: "Low homocysteine is generally not a concern.",
        below_hi: "कम होमोसिस्टीन आमतौर पर चिंता की बात नहीं है।",
    },
    Phrases {
        key: "blood_pressure_systolic",
        name_en: "Systolic blood pressure",
        name_hi: "सिस्टोलिक रक्तचाप",
        above_en: "High blood pressure strains the heart, kidneys and blood vessels.",
        above_hi: "उच्च रक्तचाप हृदय, गुर्दों और रक्त वाहिकाओं पर दबाव डालता है।",
        below_en: "Low blood pressure can cause dizziness and fainting.",
        below_hi: "निम्न रक्तचाप से चक्कर और बेहोशी हो सकती है।",
    },
    Phrases {
        key: "blood_pressure_diastolic",
        name_en: "Diastolic blood pressure",
        name_hi: "डायस्टोलिक रक्तचाप",
        above_en: "High diastolic pressure means the arteries stay under strain between beats.",
        above_hi: "अधिक डायस्टोलिक दबाव का अर्थ है कि धड़कनों के बीच भी धमनियों पर दबाव बना रहता है।",
        below_en: "Low diastolic pressure can reduce blood flow to the heart.",
        below_hi: "कम डायस्टोलिक दबाव से हृदय तक रक्त प्रवाह घट सकता है।",
    },
    Phrases {
        key: "heart_rate",
        name_en: "Heart rate",
        name_hi: "हृदय गति",
        above_en: "A fast resting heart rate can signal stress, fever, anaemia or a rhythm problem.",
        above_hi: "आराम की अवस्था में तेज़ हृदय गति तनाव, बुखार, खून की कमी या धड़कन की समस्या का संकेत हो सकती है।",
        below_en: "A slow heart rate can cause tiredness and fainting unless you are very fit.",
        below_hi: "धीमी हृदय गति से थकान और बेहोशी हो सकती है, जब तक आप बहुत फिट न हों।",
    },
    Phrases {
        key: "age",
        name_en: "Age",
        name_hi: "आयु",
        above_en: "Risk of heart disease and diabetes rises with age, so regular screening matters.",
        above_hi: "उम्र के साथ हृदय रोग और डायबिटीज़ का खतरा बढ़ता है, इसलिए नियमित जाँच ज़रूरी है।",
        below_en: "Adult reference ranges may not apply at this age.",
        below_hi: "इस उम्र में वयस्कों की संदर्भ सीमाएँ लागू नहीं हो सकतीं।",
    },
    Phrases {
        key: "bmi",
        name_en: "BMI",
        name_hi: "बीएमआई",
        above_en: "Excess body weight raises the risk of diabetes, high blood pressure and heart disease.",
        above_hi: "अधिक वज़न से डायबिटीज़, उच्च रक्तचाप और हृदय रोग का खतरा बढ़ता है।",
        below_en: "Being underweight can point to poor nutrition.",
        below_hi: "कम वज़न कुपोषण का संकेत हो सकता है।",
    },
    Phrases {
        key: "creatinine",
        name_en: "Creatinine",
        name_hi: "क्रिएटिनिन",
        above_en: "Raised creatinine suggests the kidneys are not filtering well.",
        above_hi: "बढ़ा हुआ क्रिएटिनिन बताता है कि गुर्दे ठीक से फ़िल्टर नहीं कर रहे।",
        below_en: "Low creatinine usually reflects low muscle mass.",
        below_hi: "कम क्रिएटिनिन आमतौर पर कम मांसपेशियों को दर्शाता है।",
    },
    Phrases {
        key: "egfr",
        name_en: "eGFR",
        name_hi: "ईजीएफआर",
        above_en: "A high filtration rate is usually not a concern.",
        above_hi: "अधिक फ़िल्ट्रेशन दर आमतौर पर चिंता की बात नहीं है।",
        below_en: "Low eGFR means reduced kidney function.",
        below_hi: "कम ईजीएफआर का अर्थ है गुर्दों की कार्यक्षमता में कमी।",
    },
    Phrases {
        key: "urea",
        name_en: "Urea",
        name_hi: "यूरिया",
        above_en: "High urea can mean dehydration or reduced kidney function.",
        above_hi: "अधिक यूरिया पानी की कमी या गुर्दों की कम कार्यक्षमता का संकेत हो सकता है।",
        below_en: "Low urea can reflect a low-protein diet or liver conditions.",
        below_hi: "कम यूरिया कम प्रोटीन वाले आहार या लिवर की समस्या दर्शा सकता है।",
    },
    Phrases {
        key: "bun",
        name_en: "Blood urea nitrogen",
        name_hi: "ब्लड यूरिया नाइट्रोजन",
        above_en: "High BUN can mean dehydration or reduced kidney function.",
        above_hi: "अधिक बीयूएन पानी की कमी या गुर्दों की कम कार्यक्षमता का संकेत हो सकता है।",
        below_en: "Low BUN can reflect a low-protein diet or liver conditions.",
        below_hi: "कम बीयूएन कम प्रोटीन वाले आहार या लिवर की समस्या दर्शा सकता है।",
    },
    Phrases {
        key: "uric_acid",
        name_en: "Uric acid",
        name_hi: "यूरिक एसिड",
        above_en: "High uric acid can cause gout and kidney stones.",
        above_hi: "अधिक यूरिक एसिड से गठिया (गाउट) और गुर्दे की पथरी हो सकती है।",
        below_en: "Low uric acid is rarely a concern.",
        below_hi: "कम यूरिक एसिड शायद ही कभी चिंता की बात होती है।",
    },
    Phrases {
        key: "hemoglobin",
        name_en: "Hemoglobin",
        name_hi: "हीमोग्लोबिन",
        above_en: "High hemoglobin can come from dehydration, smoking or living at altitude.",
        above_hi: "अधिक हीमोग्लोबिन पानी की कमी, धूम्रपान या ऊँचाई पर रहने से हो सकता है।",
        below_en: "Low hemoglobin means anaemia, which causes tiredness and breathlessness.",
        below_hi: "कम हीमोग्लोबिन का अर्थ है खून की कमी (एनीमिया), जिससे थकान और साँस फूलती है।",
    },
    Phrases {
        key: "hematocrit",
        name_en: "Hematocrit",
        name_hi: "हीमैटोक्रिट (पीसीवी)",
        above_en: "A high hematocrit can come from dehydration or a raised red cell mass.",
        above_hi: "अधिक हीमैटोक्रिट पानी की कमी या लाल रक्त कोशिकाओं की अधिकता से हो सकता है।",
        below_en: "A low hematocrit usually goes with anaemia.",
        below_hi: "कम हीमैटोक्रिट आमतौर पर खून की कमी (एनीमिया) के साथ होता है।",
    },
    Phrases {
        key: "mcv",
        name_en: "MCV",
        name_hi: "एमसीवी",
        above_en: "Large red cells often point to low vitamin B12 or folate.",
        above_hi: "बड़ी लाल रक्त कोशिकाएँ अक्सर विटामिन बी12 या फोलेट की कमी दर्शाती हैं।",
        below_en: "Small red cells often point to iron deficiency.",
        below_hi: "छोटी लाल रक्त कोशिकाएँ अक्सर आयरन की कमी दर्शाती हैं।",
    },
    Phrases {
        key: "mch",
        name_en: "MCH",
        name_hi: "एमसीएच",
        above_en: "High MCH usually accompanies large red cells, as in B12 or folate deficiency.",
        above_hi: "अधिक एमसीएच आमतौर पर बड़ी लाल कोशिकाओं के साथ होता है, जैसे बी12 या फोलेट की कमी में।",
        below_en: "Low MCH means each red cell carries less hemoglobin, often from iron deficiency.",
        below_hi: "कम एमसीएच का अर्थ है हर लाल कोशिका में कम हीमोग्लोबिन, अक्सर आयरन की कमी से।",
    },
    Phrases {
        key: "mchc",
        name_en: "MCHC",
        name_hi: "एमसीएचसी",
        above_en: "High MCHC is uncommon and can reflect a red cell membrane disorder.",
        above_hi: "अधिक एमसीएचसी असामान्य है और लाल कोशिका झिल्ली के विकार को दर्शा सकता है।",
        below_en: "Low MCHC suggests pale red cells, commonly from iron deficiency.",
        below_hi: "कम एमसीएचसी फीकी लाल कोशिकाओं का संकेत है, आमतौर पर आयरन की कमी से।",
    },
    Phrases {
        key: "platelets",
        name_en: "Platelets",
        name_hi: "प्लेटलेट्स",
        above_en: "High platelets can follow infection or inflammation and may raise clotting risk.",
        above_hi: "अधिक प्लेटलेट्स संक्रमण या सूजन के बाद हो सकते हैं और थक्के का खतरा बढ़ा सकते हैं।",
        below_en: "Low platelets increase the risk of bleeding; dengue is a common cause.",
        below_hi: "कम प्लेटलेट्स से रक्तस्राव का खतरा बढ़ता है; डेंगू इसका आम कारण है।",
    },
    Phrases {
        key: "wbc",
        name_en: "White blood cells",
        name_hi: "श्वेत रक्त कोशिकाएँ",
        above_en: "A high white cell count usually signals infection or inflammation.",
        above_hi: "अधिक श्वेत रक्त कोशिकाएँ आमतौर पर संक्रमण या सूजन का संकेत हैं।",
        below_en: "A low white cell count weakens defence against infection.",
        below_hi: "कम श्वेत रक्त कोशिकाएँ संक्रमण से लड़ने की क्षमता घटाती हैं।",
    },
    Phrases {
        key: "rbc",
        name_en: "Red blood cells",
        name_hi: "लाल रक्त कोशिकाएँ",
        above_en: "A high red cell count can come from dehydration or lung conditions.",
        above_hi: "अधिक लाल रक्त कोशिकाएँ पानी की कमी या फेफड़ों की समस्या से हो सकती हैं।",
        below_en: "A low red cell count points to anaemia.",
        below_hi: "कम लाल रक्त कोशिकाएँ खून की कमी (एनीमिया) का संकेत हैं।",
    },
    Phrases {
        key: "sgpt",
        name_en: "SGPT (ALT)",
        name_hi: "एसजीपीटी (एएलटी)",
        above_en: "Raised SGPT indicates stress or injury to the liver, such as fatty liver.",
        above_hi: "बढ़ा हुआ एसजीपीटी लिवर पर दबाव या चोट, जैसे फैटी लिवर, का संकेत है।",
        below_en: "Low SGPT is not a concern.",
        below_hi: "कम एसजीपीटी चिंता की बात नहीं है।",
    },
    Phrases {
        key: "sgot",
        name_en: "SGOT (AST)",
        name_hi: "एसजीओटी (एएसटी)",
        above_en: "Raised SGOT can reflect liver or muscle injury.",
        above_hi: "बढ़ा हुआ एसजीओटी लिवर या मांसपेशियों की चोट दर्शा सकता है।",
        below_en: "Low SGOT is not a concern.",
        below_hi: "कम एसजीओटी चिंता की बात नहीं है।",
    },
    Phrases {
        key: "total_bilirubin",
        name_en: "Total bilirubin",
        name_hi: "कुल बिलीरुबिन",
        above_en: "High bilirubin can cause jaundice and points to liver or bile duct problems.",
        above_hi: "अधिक बिलीरुबिन से पीलिया हो सकता है और यह लिवर या पित्त नली की समस्या दर्शाता है।",
        below_en: "Low bilirubin is not a concern.",
        below_hi: "कम बिलीरुबिन चिंता की बात नहीं है।",
    },
    Phrases {
        key: "direct_bilirubin",
        name_en: "Direct bilirubin",
        name_hi: "डायरेक्ट बिलीरुबिन",
        above_en: "Raised direct bilirubin points to a liver or bile flow problem.",
        above_hi: "बढ़ा हुआ डायरेक्ट बिलीरुबिन लिवर या पित्त के बहाव की समस्या दर्शाता है।",
        below_en: "Low direct bilirubin is not a concern.",
        below_hi: "कम डायरेक्ट बिलीरुबिन चिंता की बात नहीं है।",
    },
    Phrases {
        key: "indirect_bilirubin",
        name_en: "Indirect bilirubin",
        name_hi: "इनडायरेक्ट बिलीरुबिन",
        above_en: "Raised indirect bilirubin can come from faster breakdown of red cells or Gilbert syndrome.",
        above_hi: "बढ़ा हुआ इनडायरेक्ट बिलीरुबिन लाल कोशिकाओं के तेज़ टूटने या गिल्बर्ट सिंड्रोम से हो सकता है।",
        below_en: "Low indirect bilirubin is not a concern.",
        below_hi: "कम इनडायरेक्ट बिलीरुबिन चिंता की बात नहीं है।",
    },
    Phrases {
        key: "total_protein",
        name_en: "Total protein",
        name_hi: "कुल प्रोटीन",
        above_en: "High total protein can reflect dehydration or long-standing inflammation.",
        above_hi: "अधिक कुल प्रोटीन पानी की कमी या लंबे समय की सूजन दर्शा सकता है।",
        below_en: "Low total protein can reflect poor nutrition, liver or kidney disease.",
        below_hi: "कम कुल प्रोटीन कुपोषण, लिवर या गुर्दे की बीमारी दर्शा सकता है।",
    },
    Phrases {
        key: "globulin",
        name_en: "Globulin",
        name_hi: "ग्लोबुलिन",
        above_en: "High globulin can signal chronic infection or inflammation.",
        above_hi: "अधिक ग्लोबुलिन पुराने संक्रमण या सूजन का संकेत हो सकता है।",
        below_en: "Low globulin can weaken immune defence.",
        below_hi: "कम ग्लोबुलिन से रोग प्रतिरोधक क्षमता कमज़ोर हो सकती है।",
    },
    Phrases {
        key: "albumin",
        name_en: "Albumin",
        name_hi: "एल्ब्यूमिन",
        above_en: "High albumin usually reflects dehydration.",
        above_hi: "अधिक एल्ब्यूमिन आमतौर पर पानी की कमी दर्शाता है।",
        below_en: "Low albumin can reflect poor nutrition, liver or kidney disease.",
        below_hi: "कम एल्ब्यूमिन कुपोषण, लिवर या गुर्दे की बीमारी दर्शा सकता है।",
    },
    Phrases {
        key: "alp",
        name_en: "Alkaline phosphatase",
        name_hi: "एल्कलाइन फॉस्फेटेज़",
        above_en: "High ALP can come from liver, bile duct or bone conditions.",
        above_hi: "अधिक एएलपी लिवर, पित्त नली या हड्डियों की समस्या से हो सकता है।",
        below_en: "Low ALP can reflect zinc or magnesium deficiency.",
        below_hi: "कम एएलपी ज़िंक या मैग्नीशियम की कमी दर्शा सकता है।",
    },
    Phrases {
        key: "tsh",
        name_en: "TSH",
        name_hi: "टीएसएच",
        above_en: "High TSH suggests an underactive thyroid (hypothyroidism).",
        above_hi: "अधिक टीएसएच थायरॉइड के कम काम करने (हाइपोथायरॉइडिज़्म) का संकेत है।",
        below_en: "Low TSH suggests an overactive thyroid (hyperthyroidism).",
        below_hi: "कम टीएसएच थायरॉइड के अधिक काम करने (हाइपरथायरॉइडिज़्म) का संकेत है।",
    },
    Phrases {
        key: "vitamin_d",
        name_en: "Vitamin D",
        name_hi: "विटामिन डी",
        above_en: "Very high vitamin D usually comes from excess supplements.",
        above_hi: "बहुत अधिक विटामिन डी आमतौर पर ज़्यादा सप्लीमेंट लेने से होता है।",
        below_en: "Low vitamin D weakens bones and muscles.",
        below_hi: "विटामिन डी की कमी से हड्डियाँ और मांसपेशियाँ कमज़ोर होती हैं।",
    },
    Phrases {
        key: "vitamin_b12",
        name_en: "Vitamin B12",
        name_hi: "विटामिन बी12",
        above_en: "High B12 is usually from supplements and rarely a concern.",
        above_hi: "अधिक बी12 आमतौर पर सप्लीमेंट से होता है और शायद ही चिंता की बात है।",
        below_en: "Low B12 can cause tingling, fatigue and anaemia.",
        below_hi: "बी12 की कमी से झुनझुनी, थकान और खून की कमी हो सकती है।",
    },
];
