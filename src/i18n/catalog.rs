//! 내장 언어 묶음. 영어 표가 기준이며 다른 언어 표도 같은 키 집합을 가져야 한다.

use super::Language;

pub(super) fn table(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::En => EN,
        Language::Hi => HI,
        Language::Gu => GU,
    }
}

const EN: &[(&str, &str)] = &[
    ("app.title", "Farm Advisory Toolbox"),
    ("general.error_prefix", "Error"),
    ("general.app_exit", "Goodbye. Happy farming!"),
    ("nav.back", "Back"),
    ("prompt.menu_select", "Select: "),
    ("error.invalid_selection_retry", "Invalid selection. Please try again."),
    ("menu.exit", "Exit"),
    ("screen.coming_soon", "This tool is coming soon."),
    ("onboarding.title", "Choose your language"),
    ("onboarding.subtitle", "You can change it later in Settings."),
    ("onboarding.continue", "Continue"),
    ("greeting.named", "Good Morning, {name}!"),
    ("greeting.generic", "Good Morning!"),
    ("greeting.subtitle", "Ready to grow your crops smarter?"),
    ("heading.tools", "Smart Farming Tools"),
    ("heading.quick_stats", "Quick Stats"),
    ("heading.recent_activity", "Recent Activity"),
    ("alert.weather.title", "Weather Alert"),
    ("alert.weather.body", "Heavy rain expected tomorrow - avoid spraying"),
    ("alert.active", "Active"),
    ("stats.scans", "Scans Done"),
    ("stats.avg_price", "Avg Price"),
    ("stats.accuracy", "Accuracy"),
    ("recent.soil_scan", "Soil scan completed"),
    ("recent.fertilizer_plan", "Fertilizer plan prepared"),
    ("recent.market_check", "Market prices checked"),
    ("dashboard.location_unknown", "Location not set"),
    ("feature.soil.title", "Soil Scan"),
    ("feature.soil.description", "Analyze soil type"),
    ("feature.pest.title", "Pest Scan"),
    ("feature.pest.description", "Detect crop diseases"),
    ("feature.advisor.title", "Ask Advisor"),
    ("feature.advisor.description", "Voice assistance"),
    ("feature.weather.title", "Weather"),
    ("feature.weather.description", "7-day forecast"),
    ("feature.market.title", "Market Prices"),
    ("feature.market.description", "Latest mandi rates"),
    ("feature.history.title", "History"),
    ("feature.history.description", "Past advisories"),
    ("feature.settings.title", "Settings"),
    ("feature.settings.description", "Language and profile"),
    ("feature.notifications.title", "Notifications"),
    ("feature.notifications.description", "Alerts and reminders"),
    ("feature.feedback.title", "Feedback"),
    ("feature.feedback.description", "Help us improve"),
    ("feature.calendar.title", "Crop Calendar"),
    ("feature.calendar.description", "Season activity plan"),
    ("feature.fertilizer-calculator.title", "Fertilizer Calculator"),
    ("feature.fertilizer-calculator.description", "NPK and product quantities"),
    ("calc.title", "Fertilizer Calculator"),
    ("calc.crop", "Crop Type"),
    ("calc.crop_placeholder", "Select crop"),
    ("calc.area", "Area (Hectares)"),
    ("calc.area_placeholder", "Enter area"),
    ("calc.soil", "Soil Type"),
    ("calc.soil_placeholder", "Select soil type"),
    ("calc.button", "Calculate"),
    ("calc.result_heading", "Fertilizer Requirements"),
    ("calc.nitrogen", "Nitrogen (N)"),
    ("calc.phosphorus", "Phosphorus (P)"),
    ("calc.potassium", "Potassium (K)"),
    ("calc.pending", "Fill in crop, area and soil type to calculate."),
    ("crop.wheat", "Wheat"),
    ("crop.rice", "Rice"),
    ("crop.maize", "Maize"),
    ("soil.clay", "Clay"),
    ("soil.loamy", "Loamy"),
    ("soil.sandy", "Sandy"),
    ("calendar.title", "Crop Calendar"),
    ("calendar.season", "Season"),
    ("calendar.duration", "{days} days"),
    ("calendar.week", "Week {week}"),
    ("calendar.season.rabi", "Rabi"),
    ("calendar.activity.soil_preparation", "Soil Preparation"),
    ("calendar.activity.sowing", "Sowing"),
    ("calendar.activity.first_irrigation", "First Irrigation"),
    ("calendar.activity.fertilizer_application", "Fertilizer Application"),
    ("calendar.activity.harvest", "Harvest"),
    ("feedback.title", "Share Your Feedback"),
    ("feedback.subtitle", "Your suggestions help us serve farmers better."),
    ("feedback.rating_label", "Rate your experience"),
    ("feedback.category_label", "Category"),
    ("feedback.category.general", "General"),
    ("feedback.category.bug", "Report a problem"),
    ("feedback.category.feature", "Feature request"),
    ("feedback.category.accuracy", "Advice accuracy"),
    ("feedback.email_label", "Email (Optional)"),
    ("feedback.message_label", "Your Feedback"),
    ("feedback.placeholder", "Tell us about your experience, suggestions, or report any issues..."),
    ("feedback.quick_label", "Quick feedback:"),
    ("feedback.quick.helpful", "App is helpful"),
    ("feedback.quick.more_features", "Need more features"),
    ("feedback.quick.easy_to_use", "Easy to use"),
    ("feedback.quick.improve_accuracy", "Improve accuracy"),
    ("feedback.submit", "Submit Feedback"),
    ("feedback.submitted", "Feedback Submitted!"),
    ("feedback.thank_you", "Thank you for helping us improve our service."),
    ("feedback.error.empty_message", "Please write your feedback before submitting."),
    ("feedback.error.invalid_email", "Please enter a valid email address or leave it empty."),
    ("settings.title", "Settings"),
    ("settings.language", "Language"),
    ("settings.current_language", "Current language: {language}"),
    ("settings.toggle", "Switch to next language"),
    ("settings.saved", "Settings saved."),
];

const HI: &[(&str, &str)] = &[
    ("app.title", "कृषि सलाह टूलबॉक्स"),
    ("general.error_prefix", "त्रुटि"),
    ("general.app_exit", "धन्यवाद। खेती शुभ हो!"),
    ("nav.back", "वापस"),
    ("prompt.menu_select", "चुनें: "),
    ("error.invalid_selection_retry", "गलत चयन। कृपया फिर से चुनें।"),
    ("menu.exit", "बाहर निकलें"),
    ("screen.coming_soon", "यह सुविधा जल्द आ रही है।"),
    ("onboarding.title", "अपनी भाषा चुनें"),
    ("onboarding.subtitle", "आप इसे बाद में सेटिंग्स में बदल सकते हैं।"),
    ("onboarding.continue", "आगे बढ़ें"),
    ("greeting.named", "सुप्रभात, {name}!"),
    ("greeting.generic", "सुप्रभात!"),
    ("greeting.subtitle", "क्या आप समझदारी से फसल उगाने के लिए तैयार हैं?"),
    ("heading.tools", "स्मार्ट खेती उपकरण"),
    ("heading.quick_stats", "त्वरित आँकड़े"),
    ("heading.recent_activity", "हाल की गतिविधि"),
    ("alert.weather.title", "मौसम चेतावनी"),
    ("alert.weather.body", "कल भारी बारिश की संभावना - छिड़काव न करें"),
    ("alert.active", "सक्रिय"),
    ("stats.scans", "स्कैन पूरे"),
    ("stats.avg_price", "औसत भाव"),
    ("stats.accuracy", "सटीकता"),
    ("recent.soil_scan", "मिट्टी जाँच पूरी हुई"),
    ("recent.fertilizer_plan", "उर्वरक योजना तैयार"),
    ("recent.market_check", "मंडी भाव देखे गए"),
    ("dashboard.location_unknown", "स्थान सेट नहीं है"),
    ("feature.soil.title", "मिट्टी जाँच"),
    ("feature.soil.description", "मिट्टी का प्रकार जानें"),
    ("feature.pest.title", "कीट जाँच"),
    ("feature.pest.description", "फसल रोग पहचानें"),
    ("feature.advisor.title", "सलाहकार से पूछें"),
    ("feature.advisor.description", "आवाज़ सहायता"),
    ("feature.weather.title", "मौसम"),
    ("feature.weather.description", "7 दिन का पूर्वानुमान"),
    ("feature.market.title", "मंडी भाव"),
    ("feature.market.description", "ताज़ा मंडी दरें"),
    ("feature.history.title", "इतिहास"),
    ("feature.history.description", "पिछली सलाह"),
    ("feature.settings.title", "सेटिंग्स"),
    ("feature.settings.description", "भाषा और प्रोफ़ाइल"),
    ("feature.notifications.title", "सूचनाएँ"),
    ("feature.notifications.description", "चेतावनी और रिमाइंडर"),
    ("feature.feedback.title", "प्रतिक्रिया"),
    ("feature.feedback.description", "हमें बेहतर बनाने में मदद करें"),
    ("feature.calendar.title", "फसल कैलेंडर"),
    ("feature.calendar.description", "मौसम की कार्य योजना"),
    ("feature.fertilizer-calculator.title", "उर्वरक कैलकुलेटर"),
    ("feature.fertilizer-calculator.description", "NPK और खाद की मात्रा"),
    ("calc.title", "उर्वरक कैलकुलेटर"),
    ("calc.crop", "फसल का प्रकार"),
    ("calc.crop_placeholder", "फसल चुनें"),
    ("calc.area", "क्षेत्रफल (हेक्टेयर)"),
    ("calc.area_placeholder", "क्षेत्रफल दर्ज करें"),
    ("calc.soil", "मिट्टी का प्रकार"),
    ("calc.soil_placeholder", "मिट्टी का प्रकार चुनें"),
    ("calc.button", "गणना करें"),
    ("calc.result_heading", "उर्वरक आवश्यकता"),
    ("calc.nitrogen", "नाइट्रोजन (N)"),
    ("calc.phosphorus", "फॉस्फोरस (P)"),
    ("calc.potassium", "पोटाश (K)"),
    ("calc.pending", "गणना के लिए फसल, क्षेत्रफल और मिट्टी का प्रकार भरें।"),
    ("crop.wheat", "गेहूँ"),
    ("crop.rice", "धान"),
    ("crop.maize", "मक्का"),
    ("soil.clay", "चिकनी मिट्टी"),
    ("soil.loamy", "दोमट मिट्टी"),
    ("soil.sandy", "बलुई मिट्टी"),
    ("calendar.title", "फसल कैलेंडर"),
    ("calendar.season", "मौसम"),
    ("calendar.duration", "{days} दिन"),
    ("calendar.week", "सप्ताह {week}"),
    ("calendar.season.rabi", "रबी"),
    ("calendar.activity.soil_preparation", "खेत की तैयारी"),
    ("calendar.activity.sowing", "बुवाई"),
    ("calendar.activity.first_irrigation", "पहली सिंचाई"),
    ("calendar.activity.fertilizer_application", "उर्वरक डालना"),
    ("calendar.activity.harvest", "कटाई"),
    ("feedback.title", "अपनी प्रतिक्रिया दें"),
    ("feedback.subtitle", "आपके सुझाव हमें किसानों की बेहतर सेवा में मदद करते हैं।"),
    ("feedback.rating_label", "अपने अनुभव को रेट करें"),
    ("feedback.category_label", "श्रेणी"),
    ("feedback.category.general", "सामान्य"),
    ("feedback.category.bug", "समस्या बताएँ"),
    ("feedback.category.feature", "नई सुविधा का सुझाव"),
    ("feedback.category.accuracy", "सलाह की सटीकता"),
    ("feedback.email_label", "ईमेल (वैकल्पिक)"),
    ("feedback.message_label", "आपकी प्रतिक्रिया"),
    ("feedback.placeholder", "अपना अनुभव, सुझाव या कोई समस्या लिखें..."),
    ("feedback.quick_label", "त्वरित प्रतिक्रिया:"),
    ("feedback.quick.helpful", "ऐप उपयोगी है"),
    ("feedback.quick.more_features", "और सुविधाएँ चाहिए"),
    ("feedback.quick.easy_to_use", "उपयोग में आसान"),
    ("feedback.quick.improve_accuracy", "सटीकता सुधारें"),
    ("feedback.submit", "प्रतिक्रिया भेजें"),
    ("feedback.submitted", "प्रतिक्रिया भेज दी गई!"),
    ("feedback.thank_you", "हमारी सेवा सुधारने में मदद के लिए धन्यवाद।"),
    ("feedback.error.empty_message", "भेजने से पहले अपनी प्रतिक्रिया लिखें।"),
    ("feedback.error.invalid_email", "सही ईमेल पता दर्ज करें या खाली छोड़ दें।"),
    ("settings.title", "सेटिंग्स"),
    ("settings.language", "भाषा"),
    ("settings.current_language", "वर्तमान भाषा: {language}"),
    ("settings.toggle", "अगली भाषा पर जाएँ"),
    ("settings.saved", "सेटिंग्स सहेजी गईं।"),
];

const GU: &[(&str, &str)] = &[
    ("app.title", "કૃષિ સલાહ ટૂલબોક્સ"),
    ("general.error_prefix", "ભૂલ"),
    ("general.app_exit", "આભાર. ખેતી શુભ રહે!"),
    ("nav.back", "પાછા"),
    ("prompt.menu_select", "પસંદ કરો: "),
    ("error.invalid_selection_retry", "ખોટી પસંદગી. ફરી પસંદ કરો."),
    ("menu.exit", "બહાર નીકળો"),
    ("screen.coming_soon", "આ સુવિધા ટૂંક સમયમાં આવી રહી છે."),
    ("onboarding.title", "તમારી ભાષા પસંદ કરો"),
    ("onboarding.subtitle", "તમે તેને પછીથી સેટિંગ્સમાં બદલી શકો છો."),
    ("onboarding.continue", "આગળ વધો"),
    ("greeting.named", "સુપ્રભાત, {name}!"),
    ("greeting.generic", "સુપ્રભાત!"),
    ("greeting.subtitle", "શું તમે સમજદારીથી પાક ઉગાડવા તૈયાર છો?"),
    ("heading.tools", "સ્માર્ટ ખેતી સાધનો"),
    ("heading.quick_stats", "ઝડપી આંકડા"),
    ("heading.recent_activity", "તાજેતરની પ્રવૃત્તિ"),
    ("alert.weather.title", "હવામાન ચેતવણી"),
    ("alert.weather.body", "કાલે ભારે વરસાદની શક્યતા - છંટકાવ ટાળો"),
    ("alert.active", "સક્રિય"),
    ("stats.scans", "સ્કેન પૂર્ણ"),
    ("stats.avg_price", "સરેરાશ ભાવ"),
    ("stats.accuracy", "ચોકસાઈ"),
    ("recent.soil_scan", "જમીન તપાસ પૂર્ણ"),
    ("recent.fertilizer_plan", "ખાતર યોજના તૈયાર"),
    ("recent.market_check", "બજાર ભાવ જોયા"),
    ("dashboard.location_unknown", "સ્થાન સેટ નથી"),
    ("feature.soil.title", "જમીન તપાસ"),
    ("feature.soil.description", "જમીનનો પ્રકાર જાણો"),
    ("feature.pest.title", "જીવાત તપાસ"),
    ("feature.pest.description", "પાકના રોગ ઓળખો"),
    ("feature.advisor.title", "સલાહકારને પૂછો"),
    ("feature.advisor.description", "અવાજ સહાય"),
    ("feature.weather.title", "હવામાન"),
    ("feature.weather.description", "7 દિવસની આગાહી"),
    ("feature.market.title", "બજાર ભાવ"),
    ("feature.market.description", "તાજા મંડી દર"),
    ("feature.history.title", "ઇતિહાસ"),
    ("feature.history.description", "અગાઉની સલાહ"),
    ("feature.settings.title", "સેટિંગ્સ"),
    ("feature.settings.description", "ભાષા અને પ્રોફાઇલ"),
    ("feature.notifications.title", "સૂચનાઓ"),
    ("feature.notifications.description", "ચેતવણી અને યાદ અપાવનાર"),
    ("feature.feedback.title", "પ્રતિભાવ"),
    ("feature.feedback.description", "અમને સુધારવામાં મદદ કરો"),
    ("feature.calendar.title", "પાક કેલેન્ડર"),
    ("feature.calendar.description", "મોસમની કાર્ય યોજના"),
    ("feature.fertilizer-calculator.title", "ખાતર કેલ્ક્યુલેટર"),
    ("feature.fertilizer-calculator.description", "NPK અને ખાતરનું પ્રમાણ"),
    ("calc.title", "ખાતર કેલ્ક્યુલેટર"),
    ("calc.crop", "પાકનો પ્રકાર"),
    ("calc.crop_placeholder", "પાક પસંદ કરો"),
    ("calc.area", "વિસ્તાર (હેક્ટર)"),
    ("calc.area_placeholder", "વિસ્તાર દાખલ કરો"),
    ("calc.soil", "જમીનનો પ્રકાર"),
    ("calc.soil_placeholder", "જમીનનો પ્રકાર પસંદ કરો"),
    ("calc.button", "ગણતરી કરો"),
    ("calc.result_heading", "ખાતરની જરૂરિયાત"),
    ("calc.nitrogen", "નાઇટ્રોજન (N)"),
    ("calc.phosphorus", "ફોસ્ફરસ (P)"),
    ("calc.potassium", "પોટાશ (K)"),
    ("calc.pending", "ગણતરી માટે પાક, વિસ્તાર અને જમીનનો પ્રકાર ભરો."),
    ("crop.wheat", "ઘઉં"),
    ("crop.rice", "ડાંગર"),
    ("crop.maize", "મકાઈ"),
    ("soil.clay", "ચીકણી માટી"),
    ("soil.loamy", "ગોરાડુ માટી"),
    ("soil.sandy", "રેતાળ માટી"),
    ("calendar.title", "પાક કેલેન્ડર"),
    ("calendar.season", "મોસમ"),
    ("calendar.duration", "{days} દિવસ"),
    ("calendar.week", "અઠવાડિયું {week}"),
    ("calendar.season.rabi", "રવી"),
    ("calendar.activity.soil_preparation", "જમીનની તૈયારી"),
    ("calendar.activity.sowing", "વાવણી"),
    ("calendar.activity.first_irrigation", "પ્રથમ પિયત"),
    ("calendar.activity.fertilizer_application", "ખાતર આપવું"),
    ("calendar.activity.harvest", "કાપણી"),
    ("feedback.title", "તમારો પ્રતિભાવ આપો"),
    ("feedback.subtitle", "તમારા સૂચનો અમને ખેડૂતોની વધુ સારી સેવા કરવામાં મદદ કરે છે."),
    ("feedback.rating_label", "તમારા અનુભવને રેટ કરો"),
    ("feedback.category_label", "શ્રેણી"),
    ("feedback.category.general", "સામાન્ય"),
    ("feedback.category.bug", "સમસ્યા જણાવો"),
    ("feedback.category.feature", "નવી સુવિધાનું સૂચન"),
    ("feedback.category.accuracy", "સલાહની ચોકસાઈ"),
    ("feedback.email_label", "ઇમેઇલ (વૈકલ્પિક)"),
    ("feedback.message_label", "તમારો પ્રતિભાવ"),
    ("feedback.placeholder", "તમારો અનુભવ, સૂચનો અથવા કોઈ સમસ્યા લખો..."),
    ("feedback.quick_label", "ઝડપી પ્રતિભાવ:"),
    ("feedback.quick.helpful", "એપ ઉપયોગી છે"),
    ("feedback.quick.more_features", "વધુ સુવિધાઓ જોઈએ"),
    ("feedback.quick.easy_to_use", "વાપરવામાં સરળ"),
    ("feedback.quick.improve_accuracy", "ચોકસાઈ સુધારો"),
    ("feedback.submit", "પ્રતિભાવ મોકલો"),
    ("feedback.submitted", "પ્રતિભાવ મોકલાઈ ગયો!"),
    ("feedback.thank_you", "અમારી સેવા સુધારવામાં મદદ કરવા બદલ આભાર."),
    ("feedback.error.empty_message", "મોકલતા પહેલાં તમારો પ્રતિભાવ લખો."),
    ("feedback.error.invalid_email", "સાચું ઇમેઇલ સરનામું દાખલ કરો અથવા ખાલી છોડો."),
    ("settings.title", "સેટિંગ્સ"),
    ("settings.language", "ભાષા"),
    ("settings.current_language", "હાલની ભાષા: {language}"),
    ("settings.toggle", "આગલી ભાષા પર જાઓ"),
    ("settings.saved", "સેટિંગ્સ સાચવવામાં આવી."),
];
